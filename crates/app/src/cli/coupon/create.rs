use clap::Args;
use erido_app::{
    database::{self, Db},
    domain::coupons::{CouponsService, PgCouponsService, data::NewCoupon, records::CouponUuid},
};
use rust_decimal::Decimal;
use uuid::Uuid;

#[derive(Debug, Args)]
pub(crate) struct CreateCouponArgs {
    /// Code shoppers will enter at checkout
    #[arg(long)]
    code: String,

    /// Discount amount granted by the coupon
    #[arg(long)]
    discount: Decimal,

    /// Store the coupon switched off
    #[arg(long)]
    inactive: bool,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Optional coupon UUID; generated when omitted
    #[arg(long)]
    coupon_uuid: Option<Uuid>,
}

pub(crate) async fn run(args: CreateCouponArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgCouponsService::new(Db::new(pool));

    let coupon = service
        .create_coupon(NewCoupon {
            uuid: args
                .coupon_uuid
                .map_or_else(CouponUuid::new, CouponUuid::from_uuid),
            code: args.code,
            discount: args.discount,
            active: !args.inactive,
        })
        .await
        .map_err(|error| format!("failed to create coupon: {error}"))?;

    println!("coupon_uuid: {}", coupon.uuid);
    println!("code: {}", coupon.code);
    println!("discount: {}", coupon.discount);
    println!("active: {}", coupon.active);

    Ok(())
}
