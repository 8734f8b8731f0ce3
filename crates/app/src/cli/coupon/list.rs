use clap::Args;
use erido_app::{
    database::{self, Db},
    domain::coupons::{CouponsService, PgCouponsService},
};

#[derive(Debug, Args)]
pub(crate) struct ListCouponsArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: ListCouponsArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let coupons = PgCouponsService::new(Db::new(pool))
        .list_coupons()
        .await
        .map_err(|error| format!("failed to list coupons: {error}"))?;

    if coupons.is_empty() {
        println!("no coupons found");
        return Ok(());
    }

    for coupon in coupons {
        println!("coupon_uuid: {}", coupon.uuid);
        println!("code: {}", coupon.code);
        println!("discount: {}", coupon.discount);
        println!("active: {}", coupon.active);
        println!("created_at: {}", coupon.created_at);
        println!();
    }

    Ok(())
}
