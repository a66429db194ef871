use anyhow::Result;

use crate::cleanup;
use crate::config::RunConfig;
use crate::layout::Layout;

pub fn run(config: RunConfig) -> Result<()> {
    let filename = crate::output_name::resolve_filename(&config)?;

    let layout = Layout::resolve(&config, &filename.extension)?;
    layout.provision()?;

    // The temp directory goes away whether or not acquisition succeeded.
    let acquired = prepare_and_acquire(&config, &layout, &filename);
    cleanup::remove_temp_dir(&layout.temp);
    let document = acquired?;

    if config.open_after {
        crate::post::open_document(&config, &layout.output, &document);
    }

    if config.print_after {
        crate::post::print_document(&config, &document);
    }

    Ok(())
}

fn prepare_and_acquire(
    config: &RunConfig,
    layout: &Layout,
    filename: &crate::filename::ValidFilename,
) -> Result<crate::acquire::Document> {
    if let Some(wait) = &config.wait {
        crate::countdown::countdown(wait, std::thread::sleep, crate::countdown::log_notice)?;
    }

    crate::acquire::acquire(config, layout, filename)
}
