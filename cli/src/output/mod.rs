//! Output formatting module

pub mod reporter;
pub mod styles;

use console::Term;
use owo_colors::OwoColorize as _;
pub use reporter::TerminalReporter;
pub use styles::Styles;

use crate::domain::SdkError;

/// Name shown in the usage text.
pub const BIN_NAME: &str = "lazy-methods-enabler";

pub const METHODS_ENABLED: &str = "Methods have been re-enabled, succeed !";
pub const METHODS_LEFT_DISABLED: &str =
    "[DEBUG] Methods have been disabled, you should think to re-enable it later !";

/// Output context carrying the stylesheet picked for stdout.
pub struct OutputContext {
    /// Stylesheet for colored output.
    pub styles: Styles,
}

impl OutputContext {
    /// Create output context based on the environment. Colors are used only
    /// on a terminal with `NO_COLOR` unset.
    #[must_use]
    pub fn new(no_color: bool) -> Self {
        let use_colors =
            !no_color && Term::stdout().is_term() && std::env::var_os("NO_COLOR").is_none();

        let mut styles = Styles::default();
        if use_colors {
            styles.colorize();
        }

        Self { styles }
    }

    /// Usage text, with the `-disableMethods` note highlighted.
    #[must_use]
    pub fn usage_text(&self) -> String {
        let debug_note = "[DEBUG] You can add the -disableMethods argument for debugging purposes \
                          as it will force methods to be disabled.";
        format!(
            "\n\tUsage: {BIN_NAME} -host [ESXi or VCENTER IP/FQDN] -user [USERNAME] \
             -password [PASSWORD] -vm [VM IDENTIFIER]\n\
             \tThe VM IDENTIFIER must have the following format \"moid=<moref>\"\n\
             \tExample:\n\
             \t\t{BIN_NAME} -host 10.69.69.69 -user adminvcenter -password \"esxi4ever\" \
             -vm \"moid=vm-69\"\n\n\
             {}\n",
            debug_note.style(self.styles.warning)
        )
    }

    /// Print the usage text to stdout.
    pub fn usage(&self) {
        println!("{}", self.usage_text());
    }

    /// `Error: [file:line]  <hex code> <description>`
    #[must_use]
    pub fn sdk_error_line(err: &SdkError) -> String {
        format!("Error: {err}")
    }

    #[must_use]
    pub fn methods_left_disabled_line(&self) -> String {
        METHODS_LEFT_DISABLED.style(self.styles.error).to_string()
    }
}
