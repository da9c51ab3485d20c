/// Default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Fennec Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[startup]
# Loaded when no page was remembered from the previous run.
# default_uri = "about:support"

[gesture]
# Pointer travel (either axis) beyond which a tap becomes a drag and
# the trailing click is swallowed.
# click_threshold = 10.0

[bridge]
# window_id = 0
# Report stateIs = "document" for document-level load transitions.
# report_document_scope = false

[logging]
# level = "info"         # trace, debug, info, warn, error
"##
    .to_string()
}
