//! Constants used throughout goscaffold

/// Module manifest file name, written at the project root.
pub const MANIFEST_FILENAME: &str = "go.mod";

/// CSS framework config file name, written at the project root.
pub const FRAMEWORK_CONFIG_FILENAME: &str = "tailwind.config.js";

/// Static content of the CSS framework config.
pub const FRAMEWORK_CONFIG_TEMPLATE: &str = "module.exports = {\n  purge: [],\n  darkMode: false, // or 'media' or 'class'\n  theme: {\n    extend: {},\n  },\n  variants: {\n    extend: {},\n  },\n  plugins: [],\n}";

/// Token the Go toolchain prefixes its version with (`go1.21.3`).
pub const GO_VERSION_PREFIX: &str = "go";

/// Permissions for every created directory: rwx for the owner, rx for everyone else.
pub const DIRECTORY_MODE: u32 = 0o755;

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const DEFAULT: u8 = 0;
    pub const DEBUG: u8 = 1;
    pub const TRACE: u8 = 2;
}
