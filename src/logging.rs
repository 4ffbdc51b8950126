// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boothwalk-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boothwalk and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Subscriber setup for the binary. Library code only emits events.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "BOOTHWALK_LOG";

/// Picks the filter directive: `-v`/`-vv` win over `BOOTHWALK_LOG`, which wins over `warn`.
pub fn filter_directive(verbosity: u8, env_value: Option<&str>) -> String {
    match verbosity {
        0 => env_value
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or("warn")
            .to_owned(),
        1 => "info".to_owned(),
        _ => "debug".to_owned(),
    }
}

/// Installs a stderr fmt subscriber. Calling it twice is harmless.
pub fn init(verbosity: u8) {
    let env_value = std::env::var(LOG_ENV).ok();
    let directive = filter_directive(verbosity, env_value.as_deref());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::filter_directive;

    #[rstest]
    #[case(0, None, "warn")]
    #[case(0, Some("boothwalk=debug"), "boothwalk=debug")]
    #[case(0, Some("  "), "warn")]
    #[case(1, Some("error"), "info")]
    #[case(2, None, "debug")]
    #[case(7, None, "debug")]
    fn verbosity_and_env_pick_the_directive(
        #[case] verbosity: u8,
        #[case] env_value: Option<&str>,
        #[case] expected: &str,
    ) {
        assert_eq!(filter_directive(verbosity, env_value), expected);
    }
}
