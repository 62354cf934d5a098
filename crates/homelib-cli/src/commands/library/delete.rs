//! Delete library command implementation.

use anyhow::Result;
use clap::Args;

use homelib_http::Gateway;

use crate::output;

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Library id
    pub id: String,
}

pub async fn run(args: DeleteArgs, gateway: &Gateway) -> Result<()> {
    // The service echoes the deleted id back as the envelope data
    let deleted = gateway
        .delete_library(&args.id)
        .await
        .map_err(output::friendly)?;

    output::success(&format!("Deleted library {deleted}"));

    Ok(())
}
