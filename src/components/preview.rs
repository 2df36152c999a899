use crate::api::Ayah;
use crate::components::media::{
    scroll_verse_into_view, verse_element_id, BACKGROUND_VIDEO_ID, SCROLL_CONTAINER_ID,
};
use crate::components::{Icon, LoadingVersesSignal, ShareOverlay, TransportBar};
use crate::config::{Background, ReelConfig};
use crate::playback::ReelPlayback;
use dioxus::prelude::*;

/// The simulated phone. Everything inside the frame re-renders from the
/// shared config and playback signals; the frame itself never moves.
#[component]
pub fn ReelPreview() -> Element {
    let verses = use_context::<Signal<Vec<Ayah>>>();
    let config = use_context::<Signal<ReelConfig>>();
    let playback = use_context::<Signal<ReelPlayback>>();
    let loading_verses = use_context::<LoadingVersesSignal>().0;

    let show_share = use_signal(|| false);

    // Scroll presenter: center the newly active verse on every index change.
    // Cosmetic emphasis is handled by the per-verse classes below.
    let mut last_scrolled = use_signal(|| 0usize);
    {
        let playback = playback.clone();
        use_effect(move || {
            let index = playback().active_index;
            if *last_scrolled.peek() != index {
                last_scrolled.set(index);
                scroll_verse_into_view(index);
            }
        });
    }

    let cfg = config();
    let state = playback();
    let verse_list = verses();
    let is_loading = loading_verses();
    let progress_pct = state.progress * 100.0;

    rsx! {
        div { class: "flex-1 h-full bg-gray-900 flex flex-col items-center justify-center p-4 md:p-10 relative overflow-hidden",

            // Ambient glow behind the frame
            div { class: "absolute top-0 left-0 w-full h-full opacity-10 pointer-events-none",
                div { class: "absolute top-1/4 left-1/4 w-96 h-96 bg-emerald-500 rounded-full blur-[128px]" }
                div { class: "absolute bottom-1/4 right-1/4 w-96 h-96 bg-blue-600 rounded-full blur-[128px]" }
            }

            // Phone frame
            div { class: "relative w-[340px] md:w-[400px] h-[700px] md:h-[800px] bg-black rounded-[3rem] shadow-2xl border-8 border-gray-800 overflow-hidden z-10 ring-4 ring-gray-900/50",

                if is_loading {
                    div { class: "absolute inset-0 flex flex-col items-center justify-center bg-gray-900/90 text-white z-50",
                        div { class: "animate-spin rounded-full h-12 w-12 border-t-2 border-b-2 border-emerald-500 mb-4" }
                        p { class: "text-emerald-400 font-amiri", "جاري تحميل الآيات..." }
                    }
                } else if verse_list.is_empty() {
                    div { class: "absolute inset-0 flex items-center justify-center bg-gray-900 text-gray-500",
                        p { "قم باختيار سورة وآيات للبدء" }
                    }
                } else {
                    BackgroundLayer { background: cfg.background.clone(), playing: state.playing }

                    if let Some(logo) = cfg.logo.as_ref() {
                        img {
                            src: "{logo.url}",
                            alt: "Logo",
                            class: "absolute w-16 h-16 object-contain z-30 drop-shadow-lg {logo.position.class()}",
                        }
                    }

                    // Surah and reciter, pinned top center
                    div { class: "absolute top-12 left-0 w-full text-center z-20 px-4 pointer-events-none",
                        h2 { class: "text-white/90 text-lg font-bold drop-shadow-md font-amiri bg-black/20 rounded-full px-4 py-1 inline-block backdrop-blur-sm border border-white/10",
                            {cfg.surah.as_ref().map(|s| s.name.clone()).unwrap_or_default()}
                        }
                        p { class: "text-emerald-300 text-xs mt-1 drop-shadow font-medium",
                            "{cfg.reciter.name}"
                        }
                    }

                    // Verse column
                    div { class: "absolute inset-0 z-20 flex items-center justify-center",
                        div {
                            id: SCROLL_CONTAINER_ID,
                            class: "w-full h-full overflow-y-auto no-scrollbar scroll-smooth py-[60%]",
                            div { class: "flex flex-col gap-24 px-8",
                                for (index , ayah) in verse_list.iter().enumerate() {
                                    VerseBlock {
                                        key: "{ayah.number}-{index}",
                                        index,
                                        text: ayah.text.clone(),
                                        number_in_surah: ayah.number_in_surah,
                                        active: index == state.active_index,
                                        font_size: cfg.font_size,
                                        text_color: cfg.text_color.clone(),
                                    }
                                }
                            }
                        }
                    }

                    // Progress bar, reels style
                    div { class: "absolute bottom-0 left-0 w-full h-1 bg-white/20 z-30",
                        div {
                            class: "h-full bg-emerald-500 transition-all duration-300",
                            style: "width: {progress_pct}%",
                        }
                    }
                }

                ReactionRail { show_share }
            }

            TransportBar { show_share }
            ShareOverlay { visible: show_share }
        }
    }
}

#[component]
fn BackgroundLayer(background: Background, playing: bool) -> Element {
    rsx! {
        div { class: "absolute inset-0 z-0 bg-gray-900",
            match &background {
                Background::Image(url) => rsx! {
                    img {
                        src: "{url}",
                        alt: "Background",
                        class: "w-full h-full object-cover transition-transform duration-[20s] ease-linear",
                        style: if playing { "transform: scale(1.1)" } else { "transform: scale(1.0)" },
                    }
                },
                Background::Video(url) => rsx! {
                    // Play state is mirrored by the media controller, never here.
                    video {
                        id: BACKGROUND_VIDEO_ID,
                        src: "{url}",
                        class: "w-full h-full object-cover",
                        r#loop: true,
                        muted: true,
                        playsinline: true,
                    }
                },
                Background::Color(color) => rsx! {
                    div { class: "w-full h-full", style: "background-color: {color}" }
                },
            }
            div { class: "absolute inset-0 bg-black/40 backdrop-blur-[1px]" }
        }
    }
}

/// One verse in the scroll column. The active verse is full strength; the
/// rest are dimmed, blurred, and shrunk a touch.
#[component]
fn VerseBlock(
    index: usize,
    text: String,
    number_in_surah: u32,
    active: bool,
    font_size: u32,
    text_color: String,
) -> Element {
    let emphasis = if active {
        "opacity-100 scale-100 blur-none"
    } else {
        "opacity-40 scale-95 blur-[2px]"
    };

    rsx! {
        div {
            id: verse_element_id(index),
            class: "transition-all duration-700 ease-in-out transform flex flex-col items-center justify-center text-center {emphasis}",
            p {
                class: "quran-text leading-[2.5] drop-shadow-2xl",
                style: "font-size: {font_size}px; color: {text_color}; text-shadow: 0 4px 12px rgba(0,0,0,0.8)",
                "{text}"
            }
            if active {
                p { class: "text-white/60 text-sm mt-4 font-amiri border border-white/20 rounded-full px-3 py-1 inline-block bg-black/30 backdrop-blur-md",
                    "الآية {number_in_surah}"
                }
            }
        }
    }
}

/// Like / comment / share rail, reels style. Only share does anything.
#[component]
fn ReactionRail(mut show_share: Signal<bool>) -> Element {
    rsx! {
        div { class: "absolute right-4 bottom-24 flex flex-col gap-6 z-30 text-white items-center",
            div { class: "w-10 h-10 bg-black/40 rounded-full flex items-center justify-center backdrop-blur-sm hover:bg-black/60 cursor-pointer transition-colors",
                span { class: "text-xl", "❤️" }
            }
            div { class: "w-10 h-10 bg-black/40 rounded-full flex items-center justify-center backdrop-blur-sm hover:bg-black/60 cursor-pointer transition-colors",
                span { class: "text-xl", "💬" }
            }
            button {
                class: "w-10 h-10 bg-black/40 rounded-full flex items-center justify-center backdrop-blur-sm hover:bg-black/60 cursor-pointer transition-colors",
                onclick: move |_| show_share.set(true),
                Icon {
                    name: "share".to_string(),
                    class: "w-5 h-5".to_string(),
                }
            }
        }
    }
}
