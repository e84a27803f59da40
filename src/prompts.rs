pub const VIDEO_SYSTEM: &str = include_str!("../data/prompts/video_system.txt");
pub const IMAGE_SYSTEM: &str = include_str!("../data/prompts/image_system.txt");
pub const USER_CONTENT: &str = include_str!("../data/prompts/user_content.txt");

/// Replace `{{key}}` placeholders in a template string.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut result = template.to_string();
    for (key, value) in vars {
        result = result.replace(&format!("{{{{{}}}}}", key), value);
    }
    result
}
