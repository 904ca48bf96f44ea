use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{CourseView, HomeView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/courses/:course_id", CourseView)] Course { course_id: String },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "Academy" }
            ul {
                li { Link { to: Route::Home {}, "Courses" } }
            }
        }
    }
}
