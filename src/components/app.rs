use crate::api::{Ayah, QuranClient, Surah};
use crate::components::media::{rewind_audio, rewind_background_video, scroll_reel_to_top};
use crate::components::{ConfigSidebar, MediaController, ReelPreview};
use crate::config::ReelConfig;
use crate::playback::{PlaybackEvent, ReelPlayback};
use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;

// Context newtypes so the bool/u64 signals stay distinguishable.
#[derive(Clone, Copy)]
pub struct LoadingVersesSignal(pub Signal<bool>);
#[derive(Clone, Copy)]
pub struct GeneratingSignal(pub Signal<bool>);
#[derive(Clone, Copy)]
pub struct FetchTicketSignal(pub Signal<u64>);

/// A verse response is applied only while its ticket is still the newest one
/// issued; anything older lost the race to a later selection.
pub(crate) fn response_is_fresh(issued: u64, current: u64) -> bool {
    issued == current
}

/// Whether an observed reciter identity forces a verse reload. The first
/// observation (no previous identity) and repeats of the same identity never
/// reload; a real change reloads only while a reel is loaded.
pub(crate) fn reciter_change_needs_reload(
    previous: Option<&str>,
    current: &str,
    reel_loaded: bool,
) -> bool {
    match previous {
        Some(prev) => prev != current && reel_loaded,
        None => false,
    }
}

#[component]
pub fn AppShell() -> Element {
    let mut surahs = use_signal(Vec::<Surah>::new);
    let verses = use_signal(Vec::<Ayah>::new);
    let config = use_signal(ReelConfig::default);
    let playback = use_signal(ReelPlayback::default);
    let loading_verses = use_signal(|| false);
    let generating = use_signal(|| false);
    let fetch_ticket = use_signal(|| 0u64);
    let mut last_reciter = use_signal(|| None::<String>);

    // Provide state via context
    use_context_provider(|| surahs);
    use_context_provider(|| verses);
    use_context_provider(|| config);
    use_context_provider(|| playback);
    use_context_provider(|| LoadingVersesSignal(loading_verses));
    use_context_provider(|| GeneratingSignal(generating));
    use_context_provider(|| FetchTicketSignal(fetch_ticket));

    // Load the chapter catalog on mount. A failure leaves the catalog empty,
    // which keeps the generate button disabled.
    use_effect(move || {
        spawn(async move {
            let client = QuranClient::new();
            match client.get_surahs().await {
                Ok(catalog) => {
                    info!(count = catalog.len(), "loaded surah catalog");
                    surahs.set(catalog);
                }
                Err(err) => {
                    warn!("failed to load surah catalog: {err}");
                }
            }
        });
    });

    // Changing the reciter while a reel is loaded silently reloads the verse
    // list; stitching new audio onto old text could pair mismatched editions.
    {
        let config = config.clone();
        let verses = verses.clone();
        let playback = playback.clone();
        let loading_verses = loading_verses.clone();
        let generating = generating.clone();
        let fetch_ticket = fetch_ticket.clone();
        use_effect(move || {
            let reciter = config().reciter.identifier.clone();
            let previous = last_reciter.peek().clone();
            last_reciter.set(Some(reciter.clone()));

            let reel_loaded = !verses.peek().is_empty() && config.peek().surah.is_some();
            if !reciter_change_needs_reload(previous.as_deref(), &reciter, reel_loaded) {
                return;
            }

            info!(%reciter, "reciter changed, reloading verses");
            spawn_verse_fetch(
                config,
                verses,
                playback,
                loading_verses,
                generating,
                fetch_ticket,
            );
        });
    }

    rsx! {
        div {
            class: "flex h-screen w-full bg-gray-900 overflow-hidden flex-col md:flex-row font-sans",
            dir: "rtl",

            // Controls column; rendered on the right under RTL.
            ConfigSidebar {}

            main { class: "flex-1 relative h-full",
                ReelPreview {}
            }
        }

        // Media controller - drives the audio and video elements separately from UI
        MediaController {}
    }
}

/// Fetch the configured verse range and swap it into the preview. Shared by
/// the generate button and the reciter watcher.
///
/// Every call takes a fresh ticket; a response is dropped unless its ticket
/// is still the newest when it lands, so rapid re-selection can never leave
/// an older reply on screen.
pub(crate) fn spawn_verse_fetch(
    config: Signal<ReelConfig>,
    mut verses: Signal<Vec<Ayah>>,
    mut playback: Signal<ReelPlayback>,
    mut loading_verses: Signal<bool>,
    mut generating: Signal<bool>,
    mut fetch_ticket: Signal<u64>,
) {
    let snapshot = config.peek().clone();
    let Some(surah) = snapshot.surah.clone() else {
        return;
    };
    let (start, end) = snapshot.clamped_range();
    let reciter = snapshot.reciter.identifier;

    let ticket = fetch_ticket.peek().wrapping_add(1);
    fetch_ticket.set(ticket);
    generating.set(true);
    loading_verses.set(true);

    spawn(async move {
        let client = QuranClient::new();
        let fetched = match client
            .fetch_verse_range(surah.number, start, end, &reciter)
            .await
        {
            Ok(list) => list,
            Err(err) => {
                warn!(surah = surah.number, "verse fetch failed: {err}");
                Vec::new()
            }
        };

        if !response_is_fresh(ticket, *fetch_ticket.peek()) {
            // A newer request was issued mid-flight; it owns the flags now.
            info!(ticket, "dropping stale verse response");
            return;
        }

        let count = fetched.len();
        info!(surah = surah.number, start, end, count, "verse list replaced");
        verses.set(fetched);
        playback
            .write()
            .apply(PlaybackEvent::SelectionChanged { verse_count: count });
        rewind_audio();
        rewind_background_video();
        scroll_reel_to_top();
        loading_verses.set(false);
        generating.set(false);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_response_is_fresh_only_while_its_ticket_is_newest() {
        let mut current = 0u64;

        let first = current.wrapping_add(1);
        current = first;
        assert!(response_is_fresh(first, current));

        // A second selection lands before the first response returns.
        let second = current.wrapping_add(1);
        current = second;

        assert!(!response_is_fresh(first, current));
        assert!(response_is_fresh(second, current));
    }

    #[test]
    fn ticket_freshness_survives_wraparound() {
        let mut current = u64::MAX;
        let next = current.wrapping_add(1);
        current = next;

        assert!(response_is_fresh(next, current));
        assert!(!response_is_fresh(u64::MAX, current));
    }

    #[test]
    fn first_reciter_observation_never_reloads() {
        assert!(!reciter_change_needs_reload(None, "ar.alafasy", true));
        assert!(!reciter_change_needs_reload(None, "ar.alafasy", false));
    }

    #[test]
    fn unchanged_reciter_never_reloads() {
        assert!(!reciter_change_needs_reload(
            Some("ar.alafasy"),
            "ar.alafasy",
            true
        ));
    }

    #[test]
    fn reciter_change_without_a_loaded_reel_waits_for_generate() {
        assert!(!reciter_change_needs_reload(
            Some("ar.alafasy"),
            "ar.sudais",
            false
        ));
    }

    #[test]
    fn reciter_change_with_a_loaded_reel_reloads_exactly_once() {
        // The watcher sees the new identity on every re-render; only the
        // transition itself may trigger a fetch.
        let observations = ["ar.alafasy", "ar.sudais", "ar.sudais", "ar.sudais"];
        let mut previous: Option<&str> = Some("ar.alafasy");
        let mut reloads = 0;

        for current in observations {
            if reciter_change_needs_reload(previous, current, true) {
                reloads += 1;
            }
            previous = Some(current);
        }

        assert_eq!(reloads, 1);
    }

    #[test]
    fn reload_reset_pins_playback_to_the_start() {
        // Mid-playback state at the moment the reciter changes.
        let mut playback = ReelPlayback::default();
        playback.apply(PlaybackEvent::SelectionChanged { verse_count: 5 });
        playback.apply(PlaybackEvent::UserToggle);
        playback.apply(PlaybackEvent::Ended);
        playback.apply(PlaybackEvent::TimeUpdate {
            current: 1.0,
            duration: 4.0,
        });

        assert!(reciter_change_needs_reload(
            Some("ar.alafasy"),
            "ar.sudais",
            true
        ));
        playback.apply(PlaybackEvent::SelectionChanged { verse_count: 5 });

        assert_eq!(playback.active_index, 0);
        assert!(!playback.playing);
        assert_eq!(playback.progress, 0.0);
    }
}
