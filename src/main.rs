use anyhow::Result;

mod app;
mod logging;

fn main() -> Result<()> {
    let args = copy_syntax::cli::parse();
    app::run(args)
}
