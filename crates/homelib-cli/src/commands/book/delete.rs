//! Delete book command implementation.

use anyhow::Result;
use clap::Args;

use homelib_http::Gateway;

use crate::output;

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Library id
    pub library: String,

    /// Book id
    pub id: String,
}

pub async fn run(args: DeleteArgs, gateway: &Gateway) -> Result<()> {
    let deleted = gateway
        .delete_book(&args.library, &args.id)
        .await
        .map_err(output::friendly)?;

    output::success(&format!("Deleted book {deleted}"));

    Ok(())
}
