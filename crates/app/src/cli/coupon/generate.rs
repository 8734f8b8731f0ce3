use clap::Args;
use erido_app::{
    database::{self, Db},
    domain::coupons::{
        CouponGenerationPolicy, CouponGenerator, PgCouponGenerator,
        generator::{DEFAULT_BATCH_SIZE, DEFAULT_CODE_LENGTH},
    },
};
use rust_decimal::Decimal;

#[derive(Debug, Args)]
pub(crate) struct GenerateCouponsArgs {
    /// How many coupons to generate
    #[arg(long, env = "COUPON_BATCH_SIZE", default_value_t = DEFAULT_BATCH_SIZE)]
    count: usize,

    /// Characters per generated code
    #[arg(long, env = "COUPON_CODE_LENGTH", default_value_t = DEFAULT_CODE_LENGTH)]
    length: usize,

    /// Discount amounts to draw from, comma separated
    #[arg(
        long,
        env = "COUPON_DISCOUNTS",
        value_delimiter = ',',
        default_value = "5.00,10.00,15.00,20.00"
    )]
    discounts: Vec<Decimal>,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: GenerateCouponsArgs) -> Result<(), String> {
    let policy = CouponGenerationPolicy::new(args.count, args.length, args.discounts)
        .map_err(|error| format!("invalid generation settings: {error}"))?;

    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let generator = PgCouponGenerator::new(Db::new(pool), policy);

    let coupons = generator
        .generate_coupons()
        .await
        .map_err(|error| format!("failed to generate coupons: {error}"))?;

    for coupon in &coupons {
        println!("{}\t{}", coupon.code, coupon.discount);
    }

    println!("generated {} coupons", coupons.len());

    Ok(())
}
