use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use course_core::model::{CourseId, LessonId};
use services::{LearningIntent, LearningTab};

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::{
    ExerciseRowVm, LearningPageVm, LearningVm, LessonRowVm, NowPlayingVm, SummaryVm, TabBodyVm,
    TabVm, map_learning_page,
};

#[component]
pub fn CourseView(course_id: String) -> Element {
    // Keyed so a route change to another course opens a fresh view.
    rsx! {
        LearningPanel { key: "{course_id}", course_id: course_id.clone() }
    }
}

#[component]
fn LearningPanel(course_id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();

    let mut page = use_signal(move || {
        ctx.course_service()
            .open_learning(&CourseId::new(course_id), move || {
                navigator.go_back();
            })
    });

    let vm = map_learning_page(&*page.read());

    match vm {
        LearningPageVm::NotFound { course_id } => rsx! {
            div { class: "page",
                div { class: "card card--empty", id: "course-not-found",
                    p { class: "muted", "Course not found" }
                    p { class: "muted small", "No course with id \"{course_id}\"." }
                    Link { to: Route::Home {}, "Browse courses" }
                }
            }
        },
        LearningPageVm::Ready(vm) => rsx! {
            div { class: "page learning",
                button {
                    class: "learning__back",
                    r#type: "button",
                    onclick: move |_| page.write().dispatch(LearningIntent::Back),
                    "Back to Courses"
                }
                LearningLayout {
                    vm,
                    on_select_lesson: move |id: LessonId| {
                        page.write().dispatch(LearningIntent::SelectLesson(id));
                    },
                    on_select_tab: move |tab: LearningTab| {
                        page.write().dispatch(LearningIntent::SetTab(tab));
                    },
                }
            }
        },
    }
}

#[component]
fn LearningLayout(
    vm: LearningVm,
    on_select_lesson: EventHandler<LessonId>,
    on_select_tab: EventHandler<LearningTab>,
) -> Element {
    let progress_style = format!("width: {}%", vm.progress_percent);
    let player_caption = vm
        .now_playing
        .as_ref()
        .map(|now| now.title.clone())
        .unwrap_or_default();

    rsx! {
        div { class: "learning__grid",
            section { class: "learning__main",
                div { class: "player",
                    p { class: "player__title", "{player_caption}" }
                    p { class: "player__hint muted", "Video player would display here" }
                }

                header { class: "learning__header",
                    h1 { "{vm.title}" }
                    p { class: "learning__description", "{vm.description}" }
                }

                div { class: "progress",
                    {vm.position_label.clone().map(|label| rsx! {
                        span { class: "progress__position", "{label}" }
                    })}
                    span { class: "progress__label", "{vm.progress_label}" }
                    span { class: "progress__total", "{vm.total_duration_label}" }
                    div { class: "progress__track",
                        div { class: "progress__fill", style: "{progress_style}" }
                    }
                }

                {vm.now_playing.clone().map(|now| rsx! { InstructorCard { now } })}
            }

            aside { class: "learning__sidebar",
                nav { class: "tabs", role: "tablist",
                    for tab in vm.tabs.clone() {
                        TabButton { key: "{tab.label}", tab: tab.clone(), on_select: on_select_tab }
                    }
                }
                TabBody { body: vm.body.clone(), on_select_lesson }
            }
        }

        // Compact playlist for narrow windows; always the full curriculum.
        section { class: "playlist playlist--compact",
            h3 { "Playlist" }
            div { class: "playlist__grid",
                for row in vm.playlist.clone() {
                    PlaylistItem { key: "{row.id}", row: row.clone(), on_select: on_select_lesson }
                }
            }
        }
    }
}

#[component]
fn InstructorCard(now: NowPlayingVm) -> Element {
    rsx! {
        div { class: "instructor",
            p { class: "instructor__name", "{now.instructor}" }
            {now.instructor_bio.clone().map(|bio| rsx! {
                p { class: "instructor__bio muted", "{bio}" }
            })}
            {now.attachment.clone().map(|download| rsx! {
                div { class: "instructor__attachments",
                    p { class: "small", "Attachments for this video:" }
                    a { class: "button", href: "{download.href}", "{download.label}" }
                }
            })}
        }
    }
}

#[component]
fn TabButton(tab: TabVm, on_select: EventHandler<LearningTab>) -> Element {
    let class = if tab.active { "tab tab--active" } else { "tab" };
    let value = tab.tab;

    rsx! {
        button {
            class: "{class}",
            role: "tab",
            r#type: "button",
            id: "tab-{value}",
            onclick: move |_| on_select.call(value),
            "{tab.label}"
            {tab.badge.map(|count| rsx! { span { class: "tab__badge", "{count}" } })}
        }
    }
}

#[component]
fn TabBody(body: TabBodyVm, on_select_lesson: EventHandler<LessonId>) -> Element {
    match body {
        TabBodyVm::Lessons(rows) => rsx! {
            div { class: "playlist",
                h3 { "Playlist" }
                for row in rows {
                    PlaylistItem { key: "{row.id}", row: row.clone(), on_select: on_select_lesson }
                }
            }
        },
        TabBodyVm::Exercises { rows, completed_label } => rsx! {
            div { class: "exercises",
                p { class: "exercises__progress small", "{completed_label}" }
                ul {
                    for (index, row) in rows.into_iter().enumerate() {
                        ExerciseItem { key: "{index}", row }
                    }
                }
            }
        },
        TabBodyVm::Summary(summary) => rsx! { SummaryPanel { summary } },
        TabBodyVm::Empty(message) => rsx! {
            p { class: "empty muted", "{message}" }
        },
    }
}

#[component]
fn PlaylistItem(row: LessonRowVm, on_select: EventHandler<LessonId>) -> Element {
    let class = if row.active {
        "playlist__item playlist__item--active"
    } else {
        "playlist__item"
    };
    let id = row.id.clone();

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            onclick: move |_| on_select.call(id.clone()),
            span { class: "playlist__number", "{row.number}" }
            span { class: "playlist__title", "{row.title}" }
            span { class: "playlist__duration", "{row.duration_label}" }
        }
    }
}

#[component]
fn ExerciseItem(row: ExerciseRowVm) -> Element {
    let status = if row.completed { "Completed" } else { "Not started" };

    rsx! {
        li { class: "exercise",
            p { class: "exercise__title", "{row.title}" }
            p { class: "exercise__meta small",
                "{row.kind_label} · {row.difficulty_label} · {row.duration_label}"
            }
            span { class: "exercise__status", "{status}" }
        }
    }
}

#[component]
fn SummaryPanel(summary: SummaryVm) -> Element {
    rsx! {
        div { class: "summary",
            h3 { "Key points" }
            ul {
                for point in summary.key_points.clone() {
                    li { "{point}" }
                }
            }
            for section in summary.sections.clone() {
                div { class: "summary__section",
                    h4 { "{section.title}" }
                    p { "{section.body}" }
                }
            }
            {summary.download.clone().map(|download| rsx! {
                a { class: "button", href: "{download.href}", "{download.label}" }
            })}
        }
    }
}
