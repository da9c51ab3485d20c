use tracing::debug;
use wry::{PageLoadEvent, WebViewBuilder};

use crate::flags::StateFlags;
use crate::notification::EngineNotification;

use super::events::{SurfaceEvent, SurfaceEventQueue};

/// Translate one wry page-load callback into engine notifications.
///
/// wry reports only "started" and "finished", so progress is synthesized:
/// indeterminate while loading, complete once finished.
pub fn notifications_for_page_load(event: PageLoadEvent, url: String) -> Vec<EngineNotification> {
    let scope = StateFlags::IS_NETWORK | StateFlags::IS_DOCUMENT;
    match event {
        PageLoadEvent::Started => vec![
            EngineNotification::StateChange {
                flags: StateFlags::START | scope,
                status: 0,
            },
            EngineNotification::ProgressChange {
                current: -1,
                total: -1,
            },
        ],
        PageLoadEvent::Finished => vec![
            EngineNotification::ProgressChange {
                current: 100,
                total: 100,
            },
            EngineNotification::StateChange {
                flags: StateFlags::STOP | scope,
                status: 0,
            },
            EngineNotification::LocationChange { uri: url },
        ],
    }
}

pub(super) fn attach_page_load_handler<'a>(
    builder: WebViewBuilder<'a>,
    queue: SurfaceEventQueue,
) -> WebViewBuilder<'a> {
    builder.with_on_page_load_handler(move |event, url| {
        match event {
            PageLoadEvent::Started => debug!(url = %url, "page load started"),
            PageLoadEvent::Finished => debug!(url = %url, "page load finished"),
        }
        queue.extend(
            notifications_for_page_load(event, url)
                .into_iter()
                .map(SurfaceEvent::Engine),
        );
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn started_maps_to_start_and_indeterminate_progress() {
        let out = notifications_for_page_load(PageLoadEvent::Started, "https://example.com".into());
        assert_eq!(out.len(), 2);
        match &out[0] {
            EngineNotification::StateChange { flags, .. } => {
                assert!(flags.contains(StateFlags::START));
                assert!(!flags.contains(StateFlags::STOP));
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(
            out[1],
            EngineNotification::ProgressChange {
                current: -1,
                total: -1
            }
        );
    }

    #[test]
    fn finished_ends_with_location_change() {
        let out =
            notifications_for_page_load(PageLoadEvent::Finished, "https://example.com/".into());
        assert_eq!(out.len(), 3);
        assert!(matches!(
            out[1],
            EngineNotification::StateChange { flags, .. } if flags.contains(StateFlags::STOP)
        ));
        assert_eq!(
            out[2],
            EngineNotification::LocationChange {
                uri: "https://example.com/".into()
            }
        );
    }
}
