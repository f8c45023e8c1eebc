use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    clickup_mcp::cli::run().await?;
    Ok(())
}
