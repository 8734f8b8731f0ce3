use clap::{Args, Subcommand};

mod create;
mod generate;
mod list;

#[derive(Debug, Args)]
pub(crate) struct CouponCommand {
    #[command(subcommand)]
    command: CouponSubcommand,
}

#[derive(Debug, Subcommand)]
enum CouponSubcommand {
    /// Create a single coupon with a chosen code
    Create(create::CreateCouponArgs),

    /// Generate a batch of random coupons
    Generate(generate::GenerateCouponsArgs),

    /// List every stored coupon
    List(list::ListCouponsArgs),
}

pub(crate) async fn run(command: CouponCommand) -> Result<(), String> {
    match command.command {
        CouponSubcommand::Create(args) => create::run(args).await,
        CouponSubcommand::Generate(args) => generate::run(args).await,
        CouponSubcommand::List(args) => list::run(args).await,
    }
}
