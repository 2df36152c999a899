use crate::api::{Ayah, Surah};
use crate::components::app::spawn_verse_fetch;
use crate::components::{FetchTicketSignal, GeneratingSignal, Icon, LoadingVersesSignal};
use crate::config::{upload_mime_type, Background, LogoPosition, ReelConfig};
use crate::constants::{
    BACKGROUND_COLORS, BACKGROUND_IMAGES, BACKGROUND_VIDEOS, POPULAR_RECITERS, TEXT_COLORS,
};
use crate::playback::ReelPlayback;
use base64::{engine::general_purpose, Engine as _};
use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

/// The controls column: chapter and verse range, reciter, backdrop, logo,
/// and text styling, with the generate button pinned at the bottom.
#[component]
pub fn ConfigSidebar() -> Element {
    let surahs = use_context::<Signal<Vec<Surah>>>();
    let mut config = use_context::<Signal<ReelConfig>>();
    let verses = use_context::<Signal<Vec<Ayah>>>();
    let playback = use_context::<Signal<ReelPlayback>>();
    let loading_verses = use_context::<LoadingVersesSignal>().0;
    let generating = use_context::<GeneratingSignal>().0;
    let fetch_ticket = use_context::<FetchTicketSignal>().0;

    let cfg = config();
    let catalog = surahs();
    let is_generating = generating();
    let can_generate = cfg.surah.is_some() && !is_generating;

    let on_surah_change = move |e: Event<FormData>| {
        if let Ok(number) = e.value().parse::<u32>() {
            let selected = surahs.peek().iter().find(|s| s.number == number).cloned();
            if let Some(surah) = selected {
                config.write().select_surah(surah);
            }
        }
    };

    let on_start_change = move |e: Event<FormData>| {
        if let Ok(value) = e.value().parse::<u32>() {
            config.write().set_start_ayah(value);
        }
    };

    let on_end_change = move |e: Event<FormData>| {
        if let Ok(value) = e.value().parse::<u32>() {
            config.write().set_end_ayah(value);
        }
    };

    let on_reciter_change = move |e: Event<FormData>| {
        let identifier = e.value();
        let selected = POPULAR_RECITERS
            .iter()
            .find(|r| r.identifier == identifier)
            .cloned();
        if let Some(reciter) = selected {
            config.write().reciter = reciter;
        }
    };

    let on_font_size_change = move |e: Event<FormData>| {
        if let Ok(value) = e.value().parse::<u32>() {
            config.write().set_font_size(value);
        }
    };

    let on_background_upload = move |e: Event<FormData>| {
        let Some(file) = e.files().into_iter().next() else {
            return;
        };
        spawn(async move {
            let Ok(bytes) = file.read_bytes().await else {
                warn!("failed to read uploaded background");
                return;
            };
            let mime = upload_mime_type(&file.name());
            let encoded = general_purpose::STANDARD.encode(&bytes);
            let url = format!("data:{mime};base64,{encoded}");
            config.write().background = Background::from_upload(mime, url);
        });
    };

    let on_logo_upload = move |e: Event<FormData>| {
        let Some(file) = e.files().into_iter().next() else {
            return;
        };
        spawn(async move {
            let Ok(bytes) = file.read_bytes().await else {
                warn!("failed to read uploaded logo");
                return;
            };
            let mime = upload_mime_type(&file.name());
            let encoded = general_purpose::STANDARD.encode(&bytes);
            config
                .write()
                .set_logo_url(format!("data:{mime};base64,{encoded}"));
        });
    };

    let on_generate = move |_| {
        spawn_verse_fetch(
            config,
            verses,
            playback,
            loading_verses,
            generating,
            fetch_ticket,
        );
    };

    rsx! {
        div { class: "w-full md:w-96 bg-gray-800 h-full overflow-y-auto border-l border-gray-700 flex flex-col shadow-2xl z-10",
            // Header
            div { class: "p-6 border-b border-gray-700 bg-gray-800 sticky top-0 z-20",
                h1 { class: "text-2xl font-bold text-emerald-400 flex items-center gap-2",
                    Icon {
                        name: "settings".to_string(),
                        class: "w-6 h-6".to_string(),
                    }
                    span { "إعدادات الريلز" }
                }
                p { class: "text-xs text-gray-400 mt-1", "قم بتخصيص الفيديو الخاص بك" }
            }

            div { class: "p-6 space-y-8 flex-1",
                // Chapter and verse range
                section { class: "space-y-4",
                    h3 { class: "text-sm font-semibold text-gray-300 uppercase tracking-wider flex items-center gap-2",
                        span { class: "w-1 h-4 bg-emerald-500 rounded-full" }
                        "القرآن الكريم"
                    }

                    div { class: "space-y-3",
                        div {
                            label { class: "block text-xs text-gray-400 mb-1", "السورة" }
                            select {
                                class: "w-full bg-gray-700 border border-gray-600 rounded-lg p-2.5 text-sm text-white focus:ring-2 focus:ring-emerald-500 focus:border-transparent outline-none transition-all",
                                value: cfg.surah.as_ref().map(|s| s.number.to_string()).unwrap_or_default(),
                                oninput: on_surah_change,
                                option { value: "", "اختر السورة..." }
                                for surah in catalog.iter() {
                                    option { key: "{surah.number}", value: "{surah.number}",
                                        "{surah.select_label()}"
                                    }
                                }
                            }
                        }

                        div { class: "grid grid-cols-2 gap-3",
                            div {
                                label { class: "block text-xs text-gray-400 mb-1", "من آية" }
                                input {
                                    r#type: "number",
                                    min: "1",
                                    max: "{cfg.verse_limit()}",
                                    value: "{cfg.start_ayah}",
                                    oninput: on_start_change,
                                    class: "w-full bg-gray-700 border border-gray-600 rounded-lg p-2.5 text-sm text-white focus:ring-emerald-500 outline-none",
                                }
                            }
                            div {
                                label { class: "block text-xs text-gray-400 mb-1", "إلى آية" }
                                input {
                                    r#type: "number",
                                    min: "{cfg.start_ayah}",
                                    max: "{cfg.verse_limit()}",
                                    value: "{cfg.end_ayah}",
                                    oninput: on_end_change,
                                    class: "w-full bg-gray-700 border border-gray-600 rounded-lg p-2.5 text-sm text-white focus:ring-emerald-500 outline-none",
                                }
                            }
                        }
                    }
                }

                // Reciter
                section { class: "space-y-4",
                    h3 { class: "text-sm font-semibold text-gray-300 uppercase tracking-wider flex items-center gap-2",
                        Icon {
                            name: "music".to_string(),
                            class: "w-4 h-4 text-emerald-500".to_string(),
                        }
                        "القارئ"
                    }
                    select {
                        class: "w-full bg-gray-700 border border-gray-600 rounded-lg p-2.5 text-sm text-white focus:ring-2 focus:ring-emerald-500 outline-none",
                        value: "{cfg.reciter.identifier}",
                        oninput: on_reciter_change,
                        for reciter in POPULAR_RECITERS.iter() {
                            option { key: "{reciter.identifier}", value: "{reciter.identifier}",
                                "{reciter.name}"
                            }
                        }
                    }
                }

                // Backdrop
                section { class: "space-y-4",
                    h3 { class: "text-sm font-semibold text-gray-300 uppercase tracking-wider flex items-center gap-2",
                        Icon {
                            name: "image".to_string(),
                            class: "w-4 h-4 text-emerald-500".to_string(),
                        }
                        "الخلفية والمظهر"
                    }

                    div { class: "flex bg-gray-700 p-1 rounded-lg mb-4",
                        BackgroundTypeButton {
                            icon: "image",
                            label: "صورة",
                            active: matches!(cfg.background, Background::Image(_)),
                            onclick: move |_| config.write().background = Background::default_image(),
                        }
                        BackgroundTypeButton {
                            icon: "video",
                            label: "فيديو",
                            active: cfg.background.is_video(),
                            onclick: move |_| config.write().background = Background::default_video(),
                        }
                        BackgroundTypeButton {
                            icon: "palette",
                            label: "لون",
                            active: matches!(cfg.background, Background::Color(_)),
                            onclick: move |_| config.write().background = Background::default_color(),
                        }
                    }

                    match &cfg.background {
                        Background::Image(current) => rsx! {
                            div { class: "grid grid-cols-5 gap-2",
                                for url in BACKGROUND_IMAGES.iter() {
                                    button {
                                        key: "{url}",
                                        class: if current == url { "aspect-square rounded-md overflow-hidden border-2 transition-all border-emerald-500 scale-105" } else { "aspect-square rounded-md overflow-hidden border-2 transition-all border-transparent hover:border-gray-500" },
                                        onclick: move |_| config.write().background = Background::Image((*url).to_string()),
                                        img { src: "{url}", alt: "bg", class: "w-full h-full object-cover" }
                                    }
                                }
                            }
                        },
                        Background::Video(current) => rsx! {
                            div { class: "grid grid-cols-4 gap-2",
                                for url in BACKGROUND_VIDEOS.iter() {
                                    button {
                                        key: "{url}",
                                        class: if current == url { "aspect-square rounded-md overflow-hidden border-2 transition-all relative border-emerald-500 scale-105" } else { "aspect-square rounded-md overflow-hidden border-2 transition-all relative border-transparent hover:border-gray-500" },
                                        onclick: move |_| config.write().background = Background::Video((*url).to_string()),
                                        video { src: "{url}", class: "w-full h-full object-cover", muted: true }
                                        div { class: "absolute inset-0 flex items-center justify-center bg-black/20",
                                            Icon {
                                                name: "video".to_string(),
                                                class: "w-4 h-4 text-white drop-shadow-md".to_string(),
                                            }
                                        }
                                    }
                                }
                            }
                        },
                        Background::Color(current) => rsx! {
                            div { class: "grid grid-cols-7 gap-2",
                                for color in BACKGROUND_COLORS.iter() {
                                    button {
                                        key: "{color}",
                                        class: if current == color { "aspect-square rounded-full border-2 transition-all border-white scale-110" } else { "aspect-square rounded-full border-2 transition-all border-transparent hover:scale-110" },
                                        style: "background-color: {color}",
                                        onclick: move |_| config.write().background = Background::Color((*color).to_string()),
                                    }
                                }
                                label { class: "aspect-square rounded-full border-2 border-gray-600 flex items-center justify-center cursor-pointer hover:border-gray-400 bg-gray-700 relative",
                                    input {
                                        r#type: "color",
                                        class: "opacity-0 w-full h-full absolute cursor-pointer",
                                        oninput: move |e| config.write().background = Background::Color(e.value()),
                                    }
                                    Icon {
                                        name: "palette".to_string(),
                                        class: "w-3 h-3 text-gray-300".to_string(),
                                    }
                                }
                            }
                        },
                    }

                    if !matches!(cfg.background, Background::Color(_)) {
                        div { class: "relative group mt-2",
                            input {
                                r#type: "file",
                                accept: if cfg.background.is_video() { "video/*" } else { "image/*" },
                                onchange: on_background_upload,
                                class: "absolute inset-0 w-full h-full opacity-0 cursor-pointer",
                            }
                            div { class: "w-full bg-gray-700 hover:bg-gray-600 border border-dashed border-gray-500 text-gray-300 rounded-lg py-3 flex items-center justify-center gap-2 transition-colors",
                                Icon {
                                    name: "upload".to_string(),
                                    class: "w-4 h-4".to_string(),
                                }
                                span { class: "text-sm",
                                    if cfg.background.is_video() { "رفع فيديو خاص" } else { "رفع صورة خاصة" }
                                }
                            }
                        }
                    }

                    div { class: "pt-2",
                        label { class: "block text-xs text-gray-400 mb-1", "شعار القناة (Logo)" }
                        div { class: "relative group",
                            input {
                                r#type: "file",
                                accept: "image/*",
                                onchange: on_logo_upload,
                                class: "absolute inset-0 w-full h-full opacity-0 cursor-pointer",
                            }
                            div { class: "w-full bg-gray-700 hover:bg-gray-600 border border-gray-600 text-gray-300 rounded-lg py-2 flex items-center justify-center gap-2 transition-colors",
                                if cfg.logo.is_some() {
                                    span { class: "text-emerald-400 text-sm", "تم رفع الشعار" }
                                } else {
                                    span { class: "text-sm flex items-center gap-2",
                                        Icon {
                                            name: "upload".to_string(),
                                            class: "w-3 h-3".to_string(),
                                        }
                                        "رفع شعار"
                                    }
                                }
                            }
                        }
                        if let Some(logo) = cfg.logo.as_ref() {
                            div { class: "flex gap-2 mt-2 justify-center",
                                for position in LogoPosition::ALL {
                                    button {
                                        key: "{position.label()}",
                                        title: "{position.label()}",
                                        class: if logo.position == position { "w-6 h-6 rounded bg-emerald-900 border border-emerald-500" } else { "w-6 h-6 rounded bg-gray-700 border border-gray-600" },
                                        onclick: move |_| config.write().set_logo_position(position),
                                    }
                                }
                            }
                        }
                    }
                }

                // Text styling
                section { class: "space-y-4",
                    h3 { class: "text-sm font-semibold text-gray-300 uppercase tracking-wider flex items-center gap-2",
                        Icon {
                            name: "type".to_string(),
                            class: "w-4 h-4 text-emerald-500".to_string(),
                        }
                        "النص"
                    }
                    div {
                        label { class: "block text-xs text-gray-400 mb-1", "حجم الخط" }
                        input {
                            r#type: "range",
                            min: "16",
                            max: "48",
                            value: "{cfg.font_size}",
                            oninput: on_font_size_change,
                            class: "w-full h-2 bg-gray-700 rounded-lg appearance-none cursor-pointer accent-emerald-500",
                        }
                    }
                    div {
                        label { class: "block text-xs text-gray-400 mb-1", "لون النص" }
                        div { class: "flex gap-2",
                            for color in TEXT_COLORS.iter() {
                                button {
                                    key: "{color}",
                                    class: if cfg.text_color == *color { "w-6 h-6 rounded-full border-2 border-white scale-110" } else { "w-6 h-6 rounded-full border-2 border-transparent" },
                                    style: "background-color: {color}",
                                    onclick: move |_| config.write().text_color = (*color).to_string(),
                                }
                            }
                        }
                    }
                }
            }

            // Generate
            div { class: "p-6 border-t border-gray-700 bg-gray-800 sticky bottom-0 z-20",
                button {
                    disabled: !can_generate,
                    onclick: on_generate,
                    class: if cfg.surah.is_none() { "w-full py-4 rounded-xl font-bold text-lg shadow-lg flex items-center justify-center gap-2 transition-all bg-gray-700 text-gray-500 cursor-not-allowed" } else { "w-full py-4 rounded-xl font-bold text-lg shadow-lg flex items-center justify-center gap-2 transition-all transform hover:scale-[1.02] active:scale-95 bg-gradient-to-r from-emerald-600 to-teal-600 hover:from-emerald-500 hover:to-teal-500 text-white" },
                    if is_generating {
                        div { class: "animate-spin rounded-full h-5 w-5 border-b-2 border-white" }
                        "جاري المعالجة..."
                    } else {
                        Icon {
                            name: "layout".to_string(),
                            class: "w-5 h-5".to_string(),
                        }
                        "توليد الفيديو"
                    }
                }
            }
        }
    }
}

#[component]
fn BackgroundTypeButton(
    icon: String,
    label: String,
    active: bool,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        button {
            class: if active { "flex-1 flex items-center justify-center gap-2 py-1.5 rounded-md text-sm transition-all bg-gray-600 text-white shadow-sm" } else { "flex-1 flex items-center justify-center gap-2 py-1.5 rounded-md text-sm transition-all text-gray-400 hover:text-white" },
            onclick: move |e| onclick.call(e),
            Icon { name: icon.clone(), class: "w-3 h-3".to_string() }
            "{label}"
        }
    }
}
