use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::{CourseCardVm, map_course_cards};

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let cards = map_course_cards(&ctx.course_service().list_courses());

    let start_ctx = ctx.clone();
    use_effect(move || {
        if let Some(course_id) = start_ctx.take_start_course() {
            let _ = navigator.push(Route::Course {
                course_id: course_id.to_string(),
            });
        }
    });

    rsx! {
        div { class: "page",
            h2 { "Courses" }

            if cards.is_empty() {
                p { "No courses available yet." }
            } else {
                ul { class: "course-list",
                    for card in cards {
                        CourseCard { key: "{card.id}", card: card.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn CourseCard(card: CourseCardVm) -> Element {
    rsx! {
        li { class: "course-card",
            Link { class: "course-card__link", to: Route::Course { course_id: card.id.clone() },
                h3 { class: "course-card__title", "{card.title}" }
            }
            p { class: "course-card__instructor", "{card.instructor}" }
            p { class: "course-card__description", "{card.description}" }
            p { class: "course-card__meta", "{card.meta_label}" }
        }
    }
}
