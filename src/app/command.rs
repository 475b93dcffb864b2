#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Fetch palettes for `query`. The sequence number ties the eventual
    /// result action back to the submission that requested it.
    Search { seq: u64, query: String },
}
