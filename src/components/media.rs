// Media element plumbing for the reel preview.
//
// A single hidden audio element carries the active verse's recitation and a
// single background video element mirrors the play state. Both are owned
// here; the rest of the app only talks to `ReelPlayback` and the command
// helpers below.
use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::api::Ayah;
#[cfg(target_arch = "wasm32")]
use crate::config::ReelConfig;
#[cfg(target_arch = "wasm32")]
use crate::playback::{PlaybackEvent, ReelPlayback};

#[cfg(target_arch = "wasm32")]
use dioxus::core::{Runtime, RuntimeGuard};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlAudioElement, HtmlVideoElement, KeyboardEvent};

pub const AUDIO_ELEMENT_ID: &str = "quran-reels-audio";
pub const BACKGROUND_VIDEO_ID: &str = "quran-reels-bg-video";
pub const SCROLL_CONTAINER_ID: &str = "quran-reels-scroll";

/// DOM id of one verse block inside the scroll container.
pub fn verse_element_id(index: usize) -> String {
    format!("ayah-{index}")
}

/// Initialize the global audio element once.
#[cfg(target_arch = "wasm32")]
pub fn get_or_create_audio_element() -> Option<HtmlAudioElement> {
    let document = window()?.document()?;

    if let Some(existing) = document.get_element_by_id(AUDIO_ELEMENT_ID) {
        return existing.dyn_into::<HtmlAudioElement>().ok();
    }

    let audio: HtmlAudioElement = document.create_element("audio").ok()?.dyn_into().ok()?;
    audio.set_id(AUDIO_ELEMENT_ID);
    audio.set_attribute("preload", "auto").ok()?;
    document.body()?.append_child(&audio).ok()?;

    Some(audio)
}

#[cfg(target_arch = "wasm32")]
fn background_video_element() -> Option<HtmlVideoElement> {
    window()?
        .document()?
        .get_element_by_id(BACKGROUND_VIDEO_ID)?
        .dyn_into()
        .ok()
}

#[cfg(target_arch = "wasm32")]
fn web_try_play(audio: &HtmlAudioElement) {
    if let Ok(promise) = audio.play() {
        spawn(async move {
            // Autoplay rejections before the first gesture are expected.
            let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
        });
    }
}

/// Point the audio element at a new source. Loading starts on its own via
/// `preload`; resuming is the play command's job.
#[cfg(target_arch = "wasm32")]
pub fn load_audio_source(url: &str) {
    if let Some(audio) = get_or_create_audio_element() {
        audio.set_src(url);
    }
}

#[cfg(target_arch = "wasm32")]
pub fn clear_audio_source() {
    if let Some(audio) = get_or_create_audio_element() {
        let _ = audio.pause();
        audio.set_src("");
        let _ = audio.remove_attribute("src");
        audio.load();
    }
}

#[cfg(target_arch = "wasm32")]
pub fn play_audio() {
    if let Some(audio) = get_or_create_audio_element() {
        if audio.paused() {
            web_try_play(&audio);
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub fn pause_audio() {
    if let Some(audio) = get_or_create_audio_element() {
        if !audio.paused() {
            let _ = audio.pause();
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub fn rewind_audio() {
    if let Some(audio) = get_or_create_audio_element() {
        audio.set_current_time(0.0);
    }
}

#[cfg(target_arch = "wasm32")]
pub fn play_background_video() {
    if let Some(video) = background_video_element() {
        if video.paused() {
            if let Ok(promise) = video.play() {
                spawn(async move {
                    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
                });
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub fn pause_background_video() {
    if let Some(video) = background_video_element() {
        if !video.paused() {
            let _ = video.pause();
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub fn rewind_background_video() {
    if let Some(video) = background_video_element() {
        video.set_current_time(0.0);
    }
}

/// Smooth-scroll the verse at `index` into the middle of the reel.
#[cfg(target_arch = "wasm32")]
pub fn scroll_verse_into_view(index: usize) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(element) = document.get_element_by_id(&verse_element_id(index)) {
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Center);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

#[cfg(target_arch = "wasm32")]
pub fn scroll_reel_to_top() {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(container) = document.get_element_by_id(SCROLL_CONTAINER_ID) {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        container.scroll_to_with_scroll_to_options(&options);
    }
}

// Keydown targets the focused element itself, so a tag check covers every
// control the sidebar renders.
#[cfg(target_arch = "wasm32")]
fn is_form_control_target(event: &KeyboardEvent) -> bool {
    let Some(element) = event
        .target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
    else {
        return false;
    };
    matches!(
        element.tag_name().to_ascii_lowercase().as_str(),
        "input" | "textarea" | "select"
    )
}

#[cfg(target_arch = "wasm32")]
fn is_playback_shortcut(event: &KeyboardEvent) -> bool {
    if event.default_prevented() || event.is_composing() || is_form_control_target(event) {
        return false;
    }
    if event.meta_key() || event.ctrl_key() || event.alt_key() {
        return false;
    }

    let key = event.key();
    key == " " || key == "Spacebar" || event.code() == "Space" || key == "k" || key == "K"
}

/// Keeps the media elements in lockstep with `ReelPlayback`. Renders nothing.
#[cfg(target_arch = "wasm32")]
#[component]
pub fn MediaController() -> Element {
    let playback = use_context::<Signal<ReelPlayback>>();
    let verses = use_context::<Signal<Vec<Ayah>>>();
    let config = use_context::<Signal<ReelConfig>>();

    let last_src = use_signal(|| None::<String>);

    // One-time setup: singleton audio element plus media and keyboard
    // listeners routed into the playback record.
    {
        let playback = playback.clone();
        use_effect(move || {
            let Some(audio) = get_or_create_audio_element() else {
                return;
            };

            let runtime = Runtime::current();

            let runtime_ended = runtime.clone();
            let mut playback_for_ended = playback.clone();
            let ended_cb = Closure::wrap(Box::new(move || {
                let _guard = RuntimeGuard::new(runtime_ended.clone());
                playback_for_ended.write().apply(PlaybackEvent::Ended);
            }) as Box<dyn FnMut()>);

            let runtime_time = runtime.clone();
            let mut playback_for_time = playback.clone();
            let audio_for_time = audio.clone();
            let mut last_emit = -1.0f64;
            let time_cb = Closure::wrap(Box::new(move || {
                let current = audio_for_time.current_time();
                // The browser fires several updates a second; the bar only
                // needs one every 200ms.
                if (current - last_emit).abs() < 0.2 {
                    return;
                }
                last_emit = current;
                let duration = audio_for_time.duration();
                let _guard = RuntimeGuard::new(runtime_time.clone());
                playback_for_time
                    .write()
                    .apply(PlaybackEvent::TimeUpdate { current, duration });
            }) as Box<dyn FnMut()>);

            let _ =
                audio.add_event_listener_with_callback("ended", ended_cb.as_ref().unchecked_ref());
            let _ = audio
                .add_event_listener_with_callback("timeupdate", time_cb.as_ref().unchecked_ref());
            ended_cb.forget();
            time_cb.forget();

            if let Some(doc) = window().and_then(|w| w.document()) {
                let runtime_key = runtime.clone();
                let mut playback_for_key = playback.clone();
                let key_cb = Closure::wrap(Box::new(move |event: KeyboardEvent| {
                    if !is_playback_shortcut(&event) {
                        return;
                    }
                    event.prevent_default();
                    let _guard = RuntimeGuard::new(runtime_key.clone());
                    playback_for_key.write().apply(PlaybackEvent::UserToggle);
                }) as Box<dyn FnMut(KeyboardEvent)>);
                let _ =
                    doc.add_event_listener_with_callback("keydown", key_cb.as_ref().unchecked_ref());
                key_cb.forget();
            }
        });
    }

    // Keep the audio source pointed at the active verse. Swapping the source
    // while playing needs a fresh play request; browsers never auto-resume.
    {
        let playback = playback.clone();
        let verses = verses.clone();
        let mut last_src = last_src.clone();
        use_effect(move || {
            let state = playback();
            let verse_list = verses();
            let desired = verse_list
                .get(state.active_index)
                .and_then(|ayah| ayah.audio.clone());

            match desired {
                Some(url) => {
                    if Some(url.clone()) != *last_src.peek() {
                        last_src.set(Some(url.clone()));
                        load_audio_source(&url);
                        if state.playing {
                            play_audio();
                        }
                    }
                }
                None => {
                    if last_src.peek().is_some() {
                        last_src.set(None);
                    }
                    clear_audio_source();
                }
            }
        });
    }

    // Mirror the play flag onto the audio element.
    {
        let playback = playback.clone();
        use_effect(move || {
            if playback().playing {
                play_audio();
            } else {
                pause_audio();
            }
        });
    }

    // Mirror the play flag onto the background video, when there is one.
    {
        let playback = playback.clone();
        let config = config.clone();
        use_effect(move || {
            let playing = playback().playing;
            if !config().background.is_video() {
                return;
            }
            if playing {
                play_background_video();
            } else {
                pause_background_video();
            }
        });
    }

    rsx! {}
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_audio_source(_url: &str) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn clear_audio_source() {}

#[cfg(not(target_arch = "wasm32"))]
pub fn play_audio() {}

#[cfg(not(target_arch = "wasm32"))]
pub fn pause_audio() {}

#[cfg(not(target_arch = "wasm32"))]
pub fn rewind_audio() {}

#[cfg(not(target_arch = "wasm32"))]
pub fn play_background_video() {}

#[cfg(not(target_arch = "wasm32"))]
pub fn pause_background_video() {}

#[cfg(not(target_arch = "wasm32"))]
pub fn rewind_background_video() {}

#[cfg(not(target_arch = "wasm32"))]
pub fn scroll_verse_into_view(_index: usize) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn scroll_reel_to_top() {}

/// Media playback only exists in the browser; native builds render the UI
/// without sound.
#[cfg(not(target_arch = "wasm32"))]
#[component]
pub fn MediaController() -> Element {
    rsx! {}
}
