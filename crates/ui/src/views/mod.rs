mod course;
mod home;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use course::CourseView;
pub use home::HomeView;
