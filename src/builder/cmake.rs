//! CMake toolchain file rendering.

use crate::builder::toolchain::ToolchainVars;
use crate::core::settings::Settings;

/// File name of the generated toolchain file.
pub const TOOLCHAIN_FILE: &str = "quay_toolchain.cmake";

/// Render a toolchain file that sets each variable.
///
/// Pass it to CMake with `-DCMAKE_TOOLCHAIN_FILE=<path>`.
pub fn render_toolchain_file(vars: &ToolchainVars, settings: &Settings) -> String {
    let mut out = String::new();

    out.push_str("# Generated by quay. Do not edit.\n");
    out.push_str(&format!(
        "# arch: {}, build type: {}\n",
        settings.arch, settings.build_type
    ));

    if vars.is_empty() {
        return out;
    }

    out.push('\n');
    for (name, value) in vars.iter() {
        out.push_str(&format!("set({} \"{}\")\n", name, escape(value)));
    }

    out
}

/// Quote-escape a value for a CMake bracket-less string argument.
fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '$' => escaped.push_str("\\$"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::profile::{ArchitectureProfile, EmbeddedProfile};
    use crate::core::settings::Arch;

    fn render(arch: &str) -> String {
        let settings = Settings::new(Arch::new(arch));
        let profile = ArchitectureProfile::select(&settings.arch, &EmbeddedProfile::default());
        render_toolchain_file(&ToolchainVars::for_profile(&profile), &settings)
    }

    #[test]
    fn test_host_file_has_header_only() {
        let out = render("x86_64");
        assert!(out.starts_with("# Generated by quay"));
        assert!(out.contains("# arch: x86_64, build type: Release"));
        assert!(!out.contains("set("));
    }

    #[test]
    fn test_embedded_file_sets_variables() {
        let out = render("armv7hf");
        assert_eq!(out.matches("set(").count(), 10);
        assert!(out.contains("set(CMAKE_C_COMPILER \"/usr/bin/arm-linux-gnueabihf-gcc\")"));
        assert!(out.contains("set(CMAKE_FIND_ROOT_PATH_MODE_LIBRARY \"ONLY\")"));
        assert!(out.contains(
            "set(CMAKE_CXX_FLAGS \"-mcpu=cortex-a7 -mfpu=neon-vfpv4 -mfloat-abi=hard\")"
        ));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape(r#"C:\tools\"cc""#), r#"C:\\tools\\\"cc\""#);
        assert_eq!(escape("${HOME}/sysroot"), "\\${HOME}/sysroot");
        assert_eq!(escape("plain"), "plain");
    }
}
