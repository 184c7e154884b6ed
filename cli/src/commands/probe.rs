use ns_common::config::Config;
use ns_common::network::target::Target;
use ns_core::prober;

/// Runs one resolve/probe cycle against the target.
///
/// The outcome is dropped on return, which closes a connected stream; the
/// process reports the result through its exit code and console lines.
pub async fn probe(target: Target, cfg: &Config) -> anyhow::Result<()> {
    let _outcome = prober::run(&target, cfg).await?;
    Ok(())
}
