use anyhow::{anyhow, Context, Result};
use std::thread;
use std::time::Duration;

use crate::ui::progress::{ProgressConfig, ProgressRunner};

/// Sleep behind the loading animation, optionally failing at the end
pub fn execute(matches: &clap::ArgMatches) -> Result<()> {
    let seconds = matches
        .get_one::<u64>("seconds")
        .copied()
        .context("Seconds argument is required")?;
    let phrase = matches
        .get_one::<String>("phrase")
        .context("Phrase argument is required")?;
    let should_fail = matches.get_flag("fail");
    let raise = !matches.get_flag("no-raise");

    let config = ProgressConfig::default()
        .with_phrase(phrase.clone())
        .with_raise_on_failure(raise);
    let runner = ProgressRunner::stdout(config);

    let outcome = runner.run(|| {
        thread::sleep(Duration::from_secs(seconds));
        if should_fail {
            Err(anyhow!("Simulated failure after {}s", seconds))
        } else {
            Ok(seconds)
        }
    })?;

    if let Err(e) = &outcome.value {
        log::warn!("Operation failed: {}", e);
    }
    Ok(())
}
