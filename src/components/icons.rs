use dioxus::prelude::*;

/// Icon size prop
#[derive(Props, Clone, PartialEq)]
pub struct IconProps {
    #[props(default = "w-7 h-7".to_string())]
    pub class: String,
    #[props(default = false)]
    pub filled: bool,
}

#[component]
pub fn PlayIcon(props: IconProps) -> Element {
    let fill_value = if props.filled { "currentColor" } else { "none" };
    rsx! {
        svg {
            class: "{props.class}",
            xmlns: "http://www.w3.org/2000/svg",
            width: "24",
            height: "24",
            view_box: "0 0 24 24",
            fill: "{fill_value}",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            polygon { points: "6 3 20 12 6 21 6 3" }
        }
    }
}

#[component]
pub fn PauseIcon(props: IconProps) -> Element {
    let fill_value = if props.filled { "currentColor" } else { "none" };
    rsx! {
        svg {
            class: "{props.class}",
            xmlns: "http://www.w3.org/2000/svg",
            width: "24",
            height: "24",
            view_box: "0 0 24 24",
            fill: "{fill_value}",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            rect { x: "14", y: "4", width: "4", height: "16", rx: "1" }
            rect { x: "6", y: "4", width: "4", height: "16", rx: "1" }
        }
    }
}

// Volume (speaker) icon
#[component]
pub fn VolumeIcon(props: IconProps) -> Element {
    rsx! {
        svg {
            class: "{props.class}",
            xmlns: "http://www.w3.org/2000/svg",
            width: "24",
            height: "24",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            polygon { points: "11 5 6 9 2 9 2 15 6 15 11 19 11 5" }
            path { d: "M15.54 8.46a5 5 0 0 1 0 7.07" }
            path { d: "M19.07 4.93a10 10 0 0 1 0 14.14" }
        }
    }
}

// VolumeX (muted) icon
#[component]
pub fn VolumeXIcon(props: IconProps) -> Element {
    rsx! {
        svg {
            class: "{props.class}",
            xmlns: "http://www.w3.org/2000/svg",
            width: "24",
            height: "24",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            polygon { points: "11 5 6 9 2 9 2 15 6 15 11 19 11 5" }
            line { x1: "23", y1: "9", x2: "17", y2: "15" }
            line { x1: "17", y1: "9", x2: "23", y2: "15" }
        }
    }
}

#[component]
pub fn ThumbsUpIcon(props: IconProps) -> Element {
    let fill_value = if props.filled { "currentColor" } else { "none" };
    rsx! {
        svg {
            class: "{props.class}",
            xmlns: "http://www.w3.org/2000/svg",
            width: "24",
            height: "24",
            view_box: "0 0 24 24",
            fill: "{fill_value}",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M7 10v12" }
            path { d: "M15 5.88 14 10h5.83a2 2 0 0 1 1.92 2.56l-2.33 8A2 2 0 0 1 17.5 22H4a2 2 0 0 1-2-2v-8a2 2 0 0 1 2-2h2.76a2 2 0 0 0 1.79-1.11L12 2a3.13 3.13 0 0 1 3 3.88Z" }
        }
    }
}

#[component]
pub fn ThumbsDownIcon(props: IconProps) -> Element {
    let fill_value = if props.filled { "currentColor" } else { "none" };
    rsx! {
        svg {
            class: "{props.class}",
            xmlns: "http://www.w3.org/2000/svg",
            width: "24",
            height: "24",
            view_box: "0 0 24 24",
            fill: "{fill_value}",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M17 14V2" }
            path { d: "M9 18.12 10 14H4.17a2 2 0 0 1-1.92-2.56l2.33-8A2 2 0 0 1 6.5 2H20a2 2 0 0 1 2 2v8a2 2 0 0 1-2 2h-2.76a2 2 0 0 0-1.79 1.11L12 22a3.13 3.13 0 0 1-3-3.88Z" }
        }
    }
}

#[component]
pub fn MessageCircleIcon(props: IconProps) -> Element {
    rsx! {
        svg {
            class: "{props.class}",
            xmlns: "http://www.w3.org/2000/svg",
            width: "24",
            height: "24",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M7.9 20A9 9 0 1 0 4 16.1L2 22Z" }
        }
    }
}

#[component]
pub fn ShareIcon(props: IconProps) -> Element {
    rsx! {
        svg {
            class: "{props.class}",
            xmlns: "http://www.w3.org/2000/svg",
            width: "24",
            height: "24",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M4 12v8a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2v-8" }
            polyline { points: "16 6 12 2 8 6" }
            line { x1: "12", x2: "12", y1: "2", y2: "15" }
        }
    }
}

#[component]
pub fn MoreHorizontalIcon(props: IconProps) -> Element {
    rsx! {
        svg {
            class: "{props.class}",
            xmlns: "http://www.w3.org/2000/svg",
            width: "24",
            height: "24",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            circle { cx: "12", cy: "12", r: "1" }
            circle { cx: "19", cy: "12", r: "1" }
            circle { cx: "5", cy: "12", r: "1" }
        }
    }
}

// X (close) icon
#[component]
pub fn XIcon(props: IconProps) -> Element {
    rsx! {
        svg {
            class: "{props.class}",
            xmlns: "http://www.w3.org/2000/svg",
            width: "24",
            height: "24",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M18 6 6 18" }
            path { d: "m6 6 12 12" }
        }
    }
}

// ChevronUp icon
#[component]
pub fn ChevronUpIcon(props: IconProps) -> Element {
    rsx! {
        svg {
            class: "{props.class}",
            xmlns: "http://www.w3.org/2000/svg",
            width: "24",
            height: "24",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            polyline { points: "18 15 12 9 6 15" }
        }
    }
}

// ChevronDown icon
#[component]
pub fn ChevronDownIcon(props: IconProps) -> Element {
    rsx! {
        svg {
            class: "{props.class}",
            xmlns: "http://www.w3.org/2000/svg",
            width: "24",
            height: "24",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            polyline { points: "6 9 12 15 18 9" }
        }
    }
}

#[component]
pub fn VideoIcon(props: IconProps) -> Element {
    rsx! {
        svg {
            class: "{props.class}",
            xmlns: "http://www.w3.org/2000/svg",
            width: "24",
            height: "24",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "m16 13 5.223 3.482a.5.5 0 0 0 .777-.416V7.87a.5.5 0 0 0-.752-.432L16 10.5" }
            rect { x: "2", y: "6", width: "14", height: "12", rx: "2" }
        }
    }
}
