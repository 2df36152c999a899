use crate::api::Ayah;
use crate::components::media::{rewind_audio, rewind_background_video, scroll_reel_to_top};
use crate::components::Icon;
use crate::playback::{PlaybackEvent, ReelPlayback};
use dioxus::prelude::*;

/// Player strip under the phone frame: restart, play/pause, export, share.
#[component]
pub fn TransportBar(mut show_share: Signal<bool>) -> Element {
    let mut playback = use_context::<Signal<ReelPlayback>>();
    let verses = use_context::<Signal<Vec<Ayah>>>();

    let playing = playback().playing;
    let no_verses = verses().is_empty();

    let on_restart = move |_| {
        playback.write().apply(PlaybackEvent::Restart);
        rewind_audio();
        rewind_background_video();
        scroll_reel_to_top();
    };

    rsx! {
        div { class: "mt-8 flex items-center gap-6 bg-gray-800/80 p-4 rounded-2xl backdrop-blur-md border border-gray-700 shadow-xl z-20",
            button {
                class: "p-3 rounded-full hover:bg-gray-700 text-gray-300 transition-colors",
                title: "إعادة التشغيل",
                onclick: on_restart,
                Icon {
                    name: "rotate-ccw".to_string(),
                    class: "w-6 h-6".to_string(),
                }
            }

            button {
                class: "w-16 h-16 bg-gradient-to-tr from-emerald-500 to-teal-400 rounded-full flex items-center justify-center shadow-lg hover:scale-105 transition-transform active:scale-95 text-white",
                disabled: no_verses,
                onclick: move |_| playback.write().apply(PlaybackEvent::UserToggle),
                if playing {
                    Icon {
                        name: "pause".to_string(),
                        class: "w-8 h-8 fill-current".to_string(),
                    }
                } else {
                    Icon {
                        name: "play".to_string(),
                        class: "w-8 h-8 fill-current mr-1".to_string(),
                    }
                }
            }

            // Export is a stub: the app composes a live preview, nothing more.
            button {
                class: "p-3 rounded-full hover:bg-gray-700 text-gray-300 transition-colors",
                title: "تصدير",
                onclick: move |_| {
                    show_alert("سيتم تصدير الفيديو بجودة عالية قريبًا. (هذه نسخة تجريبية للعرض)");
                },
                Icon {
                    name: "download".to_string(),
                    class: "w-6 h-6".to_string(),
                }
            }

            button {
                class: "p-3 rounded-full hover:bg-gray-700 text-gray-300 transition-colors",
                title: "مشاركة",
                onclick: move |_| show_share.set(true),
                Icon {
                    name: "share".to_string(),
                    class: "w-6 h-6".to_string(),
                }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn show_alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn show_alert(_message: &str) {}
