//! Packager configuration written as JSON and passed via `--config`.

use crate::ReleaseConfig;

use std::path::Path;

use serde::Serialize;

/// Files included in (and, with a leading `!`, excluded from) the package.
pub const FILE_GLOBS: &[&str] = &[
    "**/*",
    "!**/node_modules/*/{CHANGELOG.md,README.md,README,readme.md,readme,test,__tests__,tests,powered-test,example,examples,*.d.ts}",
    "!**/node_modules/.bin",
    "!**/*.{o,hprof,orig,pyc,pyo,rbc}",
    "**/._*",
    "!**/{.DS_Store,.git,.hg,.svn,CVS,RCS,SCCS,__pycache__,thumbs.db,.gitignore,.gitattributes,.editorconfig,.flowconfig,.yarn-metadata.json,.idea,appveyor.yml,.travis.yml,circle.yml,npm-debug.log,.nyc_output,yarn.lock,.yarn-integrity}",
    "!node_modules/vue*/**/*",
    "!src/**/*",
];

const APP_ID: &str = "me.erguotou";

/// Top-level packager configuration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuilderConfig {
    app_id: String,
    product_name: String,
    files: Vec<String>,
    directories: Directories,
    compression: String,
    extra_metadata: ExtraMetadata,
    win: PlatformSection,
    nsis: NsisSection,
    mac: MacSection,
    linux: PlatformSection,
    publish: Vec<PublishTarget>,
}

#[derive(Debug, Clone, Serialize)]
struct Directories {
    app: String,
    output: String,
}

#[derive(Debug, Clone, Serialize)]
struct ExtraMetadata {
    homepage: String,
}

#[derive(Debug, Clone, Serialize)]
struct PlatformSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<String>,
    target: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
struct NsisSection {
    license: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct MacSection {
    category: String,
    target: Vec<String>,
    extend_info: MacExtendInfo,
}

#[derive(Debug, Clone, Serialize)]
struct MacExtendInfo {
    // Keeps the app out of the Dock; it lives in the menu bar only.
    #[serde(rename = "LSUIElement")]
    ls_ui_element: String,
}

#[derive(Debug, Clone, Serialize)]
struct PublishTarget {
    provider: String,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl BuilderConfig {
    /// Fixed packaging configuration for the project at `root`.
    pub fn new(release: &ReleaseConfig, root: &Path) -> Self {
        Self {
            app_id: APP_ID.to_string(),
            product_name: release.product_name.clone(),
            files: strings(FILE_GLOBS),
            directories: Directories {
                app: release.app_dir.clone(),
                output: release.output_dir.clone(),
            },
            compression: "maximum".to_string(),
            extra_metadata: ExtraMetadata {
                homepage: release.homepage.clone(),
            },
            win: PlatformSection {
                category: None,
                target: strings(&["nsis", "zip"]),
            },
            nsis: NsisSection {
                license: root.join(&release.license).display().to_string(),
            },
            mac: MacSection {
                category: "public.app-category.developer-tools".to_string(),
                target: strings(&["dmg", "zip"]),
                extend_info: MacExtendInfo {
                    ls_ui_element: "YES".to_string(),
                },
            },
            linux: PlatformSection {
                category: Some("Development".to_string()),
                target: strings(&["rpm", "tar.gz"]),
            },
            publish: vec![PublishTarget {
                provider: "github".to_string(),
            }],
        }
    }
}
