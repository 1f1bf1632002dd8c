use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = cinematch_api::Args::parse();
	cinematch_api::run(args).await
}
