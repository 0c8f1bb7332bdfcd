use dioxus::prelude::*;

use super::EarningsProps;
use crate::components::Callbacks;
use crate::loc;
use crate::routes::Route;
use crate::store::ViewStore;
use crate::widgets::*;

#[inline_props]
pub fn Statistics<'a>(cx: Scope<'a>, view_store: &'a ViewStore<'a>) -> Element<'a> {
    let callbacks = Callbacks::for_store(cx, view_store);
    let earnings = EarningsProps::from_state(view_store);
    let title = format!("{} {}", loc!("Statistikk for"), earnings.first_name);

    cx.render(rsx!(
        div {
            BackLink {
                title: earnings.parent_title.clone(),
                onclick: move |_| callbacks.navigate_to(Route::Home)
            }
            PageHeader { title: title }
            h2 { loc!("Sum inntekt per år") }
            table { class: "table",
                tbody {
                    earnings.years.iter().map(|year| rsx!(
                        tr { key: "{year.year}",
                            td { "{year.year}" }
                            td { class: "right-align-cell", "{year.sum}" }
                        }
                    ))
                }
            }
            h2 { loc!("Sum inntekt per måned") }
            earnings.months.iter().map(|year| rsx!(
                div { key: "{year.year}",
                    h3 { "{year.year}" }
                    table { class: "table",
                        tbody {
                            year.months.iter().map(|(name, sum)| rsx!(
                                tr { key: "{name}",
                                    td { "{name}" }
                                    td { class: "right-align-cell", "{sum}" }
                                }
                            ))
                        }
                    }
                }
            ))
            LogoutButton { onclick: move |_| callbacks.on_logout() }
            br {}
            TopLink { onclick: move |_| callbacks.navigate_to(Route::Home) }
        }
    ))
}
