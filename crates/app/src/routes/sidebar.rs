use crate::routes::route_for_path;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdActivity, LdAward, LdBriefcase, LdCalendar, LdChevronDown, LdChevronRight, LdFileText,
    LdLayoutDashboard, LdSettings, LdUser, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::{IconRef, NavTarget, NavigationNode};

/// Lucide glyph for a navigation icon.
#[component]
pub fn NavIcon(icon: IconRef, #[props(default = 18)] size: u32) -> Element {
    match icon {
        IconRef::Home => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: size, height: size } },
        IconRef::Settings => rsx! { Icon::<LdSettings> { icon: LdSettings, width: size, height: size } },
        IconRef::Chart => rsx! { Icon::<LdActivity> { icon: LdActivity, width: size, height: size } },
        IconRef::Users => rsx! { Icon::<LdUsers> { icon: LdUsers, width: size, height: size } },
        IconRef::Briefcase => rsx! { Icon::<LdBriefcase> { icon: LdBriefcase, width: size, height: size } },
        IconRef::Calendar => rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: size, height: size } },
        IconRef::Award => rsx! { Icon::<LdAward> { icon: LdAward, width: size, height: size } },
        IconRef::User => rsx! { Icon::<LdUser> { icon: LdUser, width: size, height: size } },
        IconRef::Document => rsx! { Icon::<LdFileText> { icon: LdFileText, width: size, height: size } },
    }
}

/// Groups open on first render: those containing the active route.
pub fn initially_expanded(nodes: &[NavigationNode], active: &str) -> Vec<&'static str> {
    nodes
        .iter()
        .filter(|node| {
            node.children
                .iter()
                .any(|child| child.target.route() == Some(active))
        })
        .map(|node| node.label)
        .collect()
}

/// Open a closed group or close an open one.
pub fn toggle_group(expanded: &mut Vec<&'static str>, label: &'static str) {
    if let Some(pos) = expanded.iter().position(|open| *open == label) {
        expanded.remove(pos);
    } else {
        expanded.push(label);
    }
}

/// Role-based sidebar. Group entries expand and collapse locally.
#[component]
pub fn SidebarMenu(nodes: Vec<NavigationNode>, #[props(default)] active: String) -> Element {
    let initial = initially_expanded(&nodes, &active);
    let expanded = use_signal(move || initial);

    rsx! {
        nav { class: "sidebar-nav",
            for node in nodes {
                MenuEntry { key: "{node.label}", node: node.clone(), expanded }
            }
        }
    }
}

#[component]
fn MenuEntry(node: NavigationNode, expanded: Signal<Vec<&'static str>>) -> Element {
    let label = node.label;

    match node.target {
        NavTarget::Route(path) => rsx! {
            Link { to: route_for_path(path), class: "sidebar-link", active_class: "active",
                NavIcon { icon: node.icon }
                span { "{label}" }
            }
        },
        NavTarget::Placeholder => {
            let is_open = expanded.read().contains(&label);
            rsx! {
                div { class: "sidebar-group",
                    button {
                        r#type: "button",
                        class: "sidebar-group-toggle",
                        aria_expanded: "{is_open}",
                        onclick: move |_| {
                            let mut open = expanded;
                            toggle_group(&mut open.write(), label);
                        },
                        NavIcon { icon: node.icon }
                        span { class: "sidebar-group-label", "{label}" }
                        if is_open {
                            Icon::<LdChevronDown> { icon: LdChevronDown, width: 14, height: 14 }
                        } else {
                            Icon::<LdChevronRight> { icon: LdChevronRight, width: 14, height: 14 }
                        }
                    }
                    if is_open {
                        div { class: "sidebar-children",
                            for child in node.children.iter().cloned() {
                                if let NavTarget::Route(path) = child.target {
                                    Link { key: "{path}", to: route_for_path(path), class: "sidebar-link sidebar-child", active_class: "active",
                                        NavIcon { icon: child.icon, size: 16 }
                                        span { "{child.label}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
