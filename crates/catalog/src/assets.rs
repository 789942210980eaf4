/// Host serving the still-image assets.
pub const ASSET_HOST: &str = "static.exercisedb.dev";

/// Derive the still-image URL for an exercise identifier. Used as the render
/// fallback behind the animated image and as the second probe target of the
/// asset checker.
#[must_use]
pub fn still_image_url(exercise_id: &str) -> String {
    format!("https://{ASSET_HOST}/api/images/{exercise_id}.png")
}
