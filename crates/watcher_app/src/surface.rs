/// The two regions a finished result lands in.
///
/// On the legacy page these were existing elements supplied by the hosting
/// template; here the hosting program supplies them.
pub trait ResultSurface {
    /// Replace the human-readable result region.
    fn set_lead(&mut self, text: &str);
    /// Replace the decoded raw payload region.
    fn set_raw(&mut self, text: &str);
}

/// Prints both regions to stdout, lead first.
#[derive(Debug, Default)]
pub struct TerminalSurface;

impl ResultSurface for TerminalSurface {
    fn set_lead(&mut self, text: &str) {
        println!("{text}");
    }

    fn set_raw(&mut self, text: &str) {
        println!();
        println!("{text}");
    }
}
