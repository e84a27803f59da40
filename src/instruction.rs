//! Builds the model instruction for a generation run.
//!
//! Pure mapping from [`GenerationOptions`] to the text handed to the model:
//! a directive lookup per option value, then template composition per
//! generation type. Same options always produce the same instruction.

use crate::options::{Audio, Background, GenerationOptions, GenerationType, Style};
use crate::prompts;

/// System instruction and user content for one generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptInstruction {
    pub system_instruction: String,
    pub user_content: String,
}

pub fn build_instruction(options: &GenerationOptions) -> PromptInstruction {
    let count = options.count.get().to_string();
    let style = style_directive(options.style);
    let background = background_directive(options.background, options.generation_type);

    let system_instruction = match options.generation_type {
        GenerationType::Video => prompts::render(
            prompts::VIDEO_SYSTEM,
            &[
                ("count", count.as_str()),
                ("style", style),
                ("background", background.as_str()),
                ("audio", audio_directive(options.audio)),
            ],
        ),
        GenerationType::Image => prompts::render(
            prompts::IMAGE_SYSTEM,
            &[
                ("count", count.as_str()),
                ("style", style),
                ("background", background.as_str()),
            ],
        ),
    };

    let kind = options.generation_type.to_string();
    let user_content = prompts::render(
        prompts::USER_CONTENT,
        &[
            ("count", count.as_str()),
            ("kind", kind.as_str()),
            ("idea", options.idea.as_str()),
        ],
    );

    PromptInstruction {
        system_instruction,
        user_content,
    }
}

fn style_directive(style: Style) -> &'static str {
    match style {
        Style::Auto => "The AI will decide the most appropriate visual style based on the user's description.",
        Style::ThreeDRender => "The visual style must be a high-quality 3D render. Emphasize realistic lighting, shadows, textures, and depth.",
        Style::FlatDesign => "The visual style must be 2D flat design. Use simple shapes, a limited and modern color palette, and clean lines without gradients or shadows.",
        Style::Cartoon => "The visual style must be a vibrant and expressive cartoon. Emphasize exaggerated movements, bold outlines, and a playful feel.",
        Style::PixelArt => "The visual style must be pixel art. Use a limited color palette and a low-resolution, blocky aesthetic reminiscent of classic video games.",
        Style::Watercolor => "The visual style must be a beautiful watercolor. Emphasize soft edges, blended colors, and a textured, hand-painted look.",
        Style::Isometric => "The visual style must be isometric. Use a 2.5D perspective with a clean, technical look. All objects should be drawn on an isometric grid.",
        Style::Cinematic => "The visual style must be cinematic. Emphasize dramatic lighting, epic camera angles (e.g., wide shots, close-ups), shallow depth of field, and a high-quality, film-like aesthetic.",
        Style::Realistic => "The visual style must be photorealistic. Strive for maximum realism, with accurate physics, lifelike materials and textures, and natural lighting.",
        Style::Surrealism => "The visual style must be surrealism. Create a dream-like, bizarre, and illogical scene. Emphasize unexpected juxtapositions and a strange, otherworldly atmosphere.",
    }
}

fn background_directive(background: Background, kind: GenerationType) -> String {
    match background {
        Background::Greenscreen => format!(
            "The {} MUST have a solid green screen background (#00FF00) for easy chroma keying. Do not describe any other background elements.",
            kind.subject_noun()
        ),
        Background::Detailed => {
            "Describe a detailed and fitting background environment that complements the main subject."
                .to_string()
        }
    }
}

fn audio_directive(audio: Audio) -> &'static str {
    match audio {
        Audio::WithAudio => "The prompt should also include a description of appropriate sound effects or a suitable music track (e.g., 'with sound of gentle waves', 'upbeat corporate music').",
        Audio::NoAudio => "CRITICAL INSTRUCTION: The animation must be completely silent. Under no circumstances should you include any keywords, phrases, or descriptions related to audio, sound effects, foley, or music. The final prompt must focus only on the visual aspects.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::PromptCount;
    use pretty_assertions::{assert_eq, assert_ne};

    const CONCRETE_STYLES: [Style; 9] = [
        Style::ThreeDRender,
        Style::FlatDesign,
        Style::Cartoon,
        Style::PixelArt,
        Style::Watercolor,
        Style::Isometric,
        Style::Cinematic,
        Style::Realistic,
        Style::Surrealism,
    ];

    fn options(generation_type: GenerationType) -> GenerationOptions {
        GenerationOptions {
            idea: "a cute robot waving".to_string(),
            generation_type,
            background: Background::Detailed,
            style: Style::Auto,
            audio: Audio::NoAudio,
            count: PromptCount::new(3),
        }
    }

    #[test]
    fn test_each_style_directive_is_unique() {
        for (i, a) in CONCRETE_STYLES.iter().enumerate() {
            for b in &CONCRETE_STYLES[i + 1..] {
                assert_ne!(style_directive(*a), style_directive(*b));
            }
        }
    }

    #[test]
    fn test_instruction_carries_only_the_selected_style_directive() {
        for style in CONCRETE_STYLES {
            let mut opts = options(GenerationType::Video);
            opts.style = style;
            let instruction = build_instruction(&opts);

            assert!(instruction
                .system_instruction
                .contains(style_directive(style)));
            for other in CONCRETE_STYLES {
                if other != style {
                    assert!(
                        !instruction
                            .system_instruction
                            .contains(style_directive(other)),
                        "{:?} instruction leaked the {:?} directive",
                        style,
                        other
                    );
                }
            }
            assert!(!instruction
                .system_instruction
                .contains(style_directive(Style::Auto)));
        }
    }

    #[test]
    fn test_auto_style_defers_to_the_model() {
        let instruction = build_instruction(&options(GenerationType::Video));
        assert!(instruction
            .system_instruction
            .contains("The AI will decide the most appropriate visual style"));
    }

    #[test]
    fn test_greenscreen_background_excludes_detailed_phrasing() {
        let mut opts = options(GenerationType::Video);
        opts.background = Background::Greenscreen;
        let instruction = build_instruction(&opts);

        assert!(instruction
            .system_instruction
            .contains("solid green screen background (#00FF00)"));
        assert!(!instruction
            .system_instruction
            .contains("Describe a detailed and fitting background environment"));
    }

    #[test]
    fn test_detailed_background_excludes_greenscreen_phrasing() {
        let instruction = build_instruction(&options(GenerationType::Video));
        assert!(instruction
            .system_instruction
            .contains("Describe a detailed and fitting background environment"));
        assert!(!instruction.system_instruction.contains("#00FF00"));
    }

    #[test]
    fn test_greenscreen_subject_noun_follows_generation_type() {
        let mut video = options(GenerationType::Video);
        video.background = Background::Greenscreen;
        assert!(build_instruction(&video)
            .system_instruction
            .contains("The animation MUST have a solid green screen background"));

        let mut image = options(GenerationType::Image);
        image.background = Background::Greenscreen;
        assert!(build_instruction(&image)
            .system_instruction
            .contains("The image MUST have a solid green screen background"));
    }

    #[test]
    fn test_video_without_audio_prohibits_sound() {
        let instruction = build_instruction(&options(GenerationType::Video));
        assert!(instruction
            .system_instruction
            .contains("The animation must be completely silent"));
    }

    #[test]
    fn test_video_with_audio_requests_a_sound_description() {
        let mut opts = options(GenerationType::Video);
        opts.audio = Audio::WithAudio;
        let instruction = build_instruction(&opts);

        assert!(instruction
            .system_instruction
            .contains("sound effects or a suitable music track"));
        assert!(!instruction.system_instruction.contains("completely silent"));
    }

    #[test]
    fn test_image_instruction_always_prohibits_motion_and_sound() {
        for audio in [Audio::WithAudio, Audio::NoAudio] {
            let mut opts = options(GenerationType::Image);
            opts.audio = audio;
            let instruction = build_instruction(&opts);

            assert!(instruction.system_instruction.contains(
                "Do not include any keywords related to animation, movement, video, or sound"
            ));
            assert!(!instruction.system_instruction.contains("completely silent"));
            assert!(!instruction
                .system_instruction
                .contains("suitable music track"));
        }
    }

    #[test]
    fn test_video_instruction_requires_a_seamless_loop() {
        let instruction = build_instruction(&options(GenerationType::Video));
        assert!(instruction
            .system_instruction
            .contains("perfect, seamless loop"));
    }

    #[test]
    fn test_role_framing_matches_generation_type() {
        assert!(build_instruction(&options(GenerationType::Video))
            .system_instruction
            .contains("AI animation generators"));
        assert!(build_instruction(&options(GenerationType::Image))
            .system_instruction
            .contains("AI image generators"));
    }

    #[test]
    fn test_count_embedded_verbatim_at_boundaries() {
        for count in [1u32, 20] {
            let mut opts = options(GenerationType::Video);
            opts.count = PromptCount::new(count);
            let instruction = build_instruction(&opts);

            assert!(instruction
                .system_instruction
                .contains(&format!("expand it into {} detailed", count)));
            assert!(instruction
                .user_content
                .contains(&format!("Generate {} video prompt(s)", count)));
        }
    }

    #[test]
    fn test_user_content_quotes_the_idea_verbatim() {
        let mut opts = options(GenerationType::Image);
        opts.idea = "  spaces kept  ".to_string();
        opts.count = PromptCount::new(5);
        let instruction = build_instruction(&opts);

        assert_eq!(
            instruction.user_content.trim_end(),
            "Generate 5 image prompt(s) for: \"  spaces kept  \""
        );
    }

    #[test]
    fn test_same_options_build_identical_instructions() {
        let opts = options(GenerationType::Video);
        assert_eq!(build_instruction(&opts), build_instruction(&opts));
    }

    #[test]
    fn test_no_placeholders_survive_rendering() {
        for generation_type in [GenerationType::Video, GenerationType::Image] {
            let instruction = build_instruction(&options(generation_type));
            assert!(!instruction.system_instruction.contains("{{"));
            assert!(!instruction.user_content.contains("{{"));
        }
    }
}
