use tokio::sync::watch;

/// The query editor surface hosting the playground.
///
/// The shell only needs the source text, a way to overwrite it and a
/// change stream; the widget itself stays on the embedder's side.
pub trait EditorSurface: Send + Sync {
    fn source(&self) -> String;

    fn set_source(&self, source: &str);

    /// Watch source edits. The receiver starts with the current value
    /// already seen, so only later edits wake it.
    fn subscribe(&self) -> watch::Receiver<String>;

    /// Whether the surface currently shows syntax diagnostics
    fn has_syntax_errors(&self) -> bool;
}
