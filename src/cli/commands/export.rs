use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::export::logic::ExportRequest;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        files,
        format,
        dataset,
        file,
        device,
        force,
    } = cmd
    {
        let set = super::load(files, cfg)?;
        let out = file.as_deref().map(expand_tilde);

        let req = ExportRequest {
            format: *format,
            dataset: *dataset,
            file: out.as_deref(),
            device: *device,
            force: *force,
        };
        ExportLogic::export(&set, cfg, &req)?;
    }
    Ok(())
}
