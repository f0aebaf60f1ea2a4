//! System package resolution for enabled tools.

use std::collections::BTreeSet;

use crate::domain::Tool;

/// `requires` token that pulls in a headless browser.
pub const BROWSER_TOKEN: &str = "chromium";

/// Path of the distribution-installed browser binary.
pub const BROWSER_EXECUTABLE: &str = "/usr/bin/chromium";

const DEPENDENCY_ALIASES: &[(&str, &[&str])] = &[
    ("nodejs", &["nodejs", "npm"]),
    (
        "chromium",
        &[
            "chromium",
            "fonts-liberation",
            "libasound2",
            "libatk-bridge2.0-0",
            "libatk1.0-0",
            "libcups2",
            "libdbus-1-3",
            "libdrm2",
            "libgbm1",
            "libgtk-3-0",
            "libnspr4",
            "libnss3",
            "libx11-xcb1",
            "libxcomposite1",
            "libxdamage1",
            "libxfixes3",
            "libxrandr2",
            "xdg-utils",
        ],
    ),
    (
        "weasyprint",
        &[
            "libpango-1.0-0",
            "libpangocairo-1.0-0",
            "libgdk-pixbuf2.0-0",
            "libffi-dev",
            "shared-mime-info",
        ],
    ),
    ("pandoc", &["pandoc"]),
];

/// Packages a known dependency token expands to, or `None` for literal package names.
pub fn alias_packages(token: &str) -> Option<&'static [&'static str]> {
    DEPENDENCY_ALIASES.iter().find(|(alias, _)| *alias == token).map(|(_, packages)| *packages)
}

/// Union of the base packages and every tool requirement, sorted and deduplicated.
pub fn resolve_packages(tools: &[&Tool], base_packages: &[String]) -> Vec<String> {
    let mut packages: BTreeSet<&str> = base_packages.iter().map(String::as_str).collect();

    for tool in tools {
        for requirement in &tool.spec.requires {
            match alias_packages(requirement) {
                Some(expanded) => packages.extend(expanded.iter().copied()),
                None => {
                    packages.insert(requirement.as_str());
                }
            }
        }
    }

    packages.into_iter().map(str::to_string).collect()
}

/// Optional build-file sections switched on by tool requirements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeatureFlags {
    /// Point Puppeteer at the system browser instead of letting it download one.
    pub system_browser: bool,
}

impl FeatureFlags {
    pub fn detect(tools: &[&Tool]) -> Self {
        Self { system_browser: tools.iter().any(|tool| tool.requires(BROWSER_TOKEN)) }
    }
}
