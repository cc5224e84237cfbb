use std::ffi::OsString;
use std::fs;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use dialoguer::Confirm;

use cplabel::CodePageId;

use crate::tempfile_utils::{write_atomically, RelativeDisplay};

#[derive(Debug)]
pub enum Outcome {
    Written {
        code_page: CodePageId,
        encoding: &'static str,
        had_errors: bool,
    },
    Skipped,
}

/// What to do when the output file already exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Overwrite {
    Always,
    Ask,
    Never,
}

impl Overwrite {
    /// Without `--force`, ask only when there is a terminal to ask on.
    pub fn from_force(force: bool) -> Self {
        if force {
            Overwrite::Always
        } else if io::stderr().is_terminal() {
            Overwrite::Ask
        } else {
            Overwrite::Never
        }
    }
}

pub fn target_path(source: &Path) -> PathBuf {
    let mut name = OsString::from(source.as_os_str());
    name.push(".utf8");
    PathBuf::from(name)
}

fn confirm_overwrite(target: &Path) -> Result<bool> {
    let answer = Confirm::new()
        .with_prompt(format!("{} exists. Overwrite?", target.display()))
        .default(false)
        .interact()
        .with_context(|| format!("Failed to confirm overwrite of {}", target.display()))?;
    Ok(answer)
}

pub fn convert_file(source: &Path, label: &str, overwrite: Overwrite) -> Result<Outcome> {
    let target = target_path(source);
    if target.exists() {
        match overwrite {
            Overwrite::Always => {}
            Overwrite::Ask => {
                if !confirm_overwrite(&target)? {
                    return Ok(Outcome::Skipped);
                }
            }
            Overwrite::Never => bail!(
                "{} already exists; use --force to overwrite it",
                target.display()
            ),
        }
    }

    let bytes =
        fs::read(source).with_context(|| format!("Failed to read {}", source.display()))?;
    let permissions = fs::metadata(source)
        .with_context(|| format!("Failed to read {}", source.display()))?
        .permissions();
    let decoded = cplabel::decode(&bytes, label);
    write_atomically(&target, decoded.text.as_bytes(), permissions)
        .with_context(|| format!("Failed to write {}", target.display()))?;

    println!(
        "decode {} -> {}",
        source.relative_to_cwd().display(),
        target.relative_to_cwd().display()
    );

    Ok(Outcome::Written {
        code_page: decoded.code_page,
        encoding: decoded.encoding.name(),
        had_errors: decoded.had_errors,
    })
}
