pub(crate) fn default_window_width() -> f32 {
    900.0
}

pub(crate) fn default_window_height() -> f32 {
    1000.0
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Info
}

pub(crate) fn default_couple_first() -> String {
    "Tuan Trinh".to_string()
}

pub(crate) fn default_couple_second() -> String {
    "An Nguyen".to_string()
}

pub(crate) fn default_event_datetime() -> String {
    "2025-10-16T10:00:00".to_string()
}

pub(crate) fn default_venue_name() -> String {
    "White Palace Conference Center".to_string()
}

pub(crate) fn default_venue_address() -> String {
    "123 Le Loi Street, Vinh City, Nghe An".to_string()
}

pub(crate) fn default_detail_lines() -> Vec<String> {
    vec![
        "Time: 10:00, October 16th 2025".to_string(),
        "Venue: White Palace Conference Center".to_string(),
        "Address: 123 Le Loi Street, Vinh City, Nghe An".to_string(),
    ]
}

pub(crate) fn default_guidelines() -> Vec<String> {
    vec![
        "Please arrive on time to celebrate with us".to_string(),
        "Dress code: smart and elegant".to_string(),
        "For gifts, kindly reach out beforehand so we can arrange".to_string(),
    ]
}

pub(crate) fn default_letter_image() -> String {
    "assets/images/letter.jpg".to_string()
}

pub(crate) fn default_hero_image() -> String {
    "assets/images/photo1.jpeg".to_string()
}

pub(crate) fn default_details_image() -> String {
    "assets/images/photo2.jpeg".to_string()
}

pub(crate) fn default_notes_image() -> String {
    "assets/images/photo3.jpeg".to_string()
}

pub(crate) fn default_final_image() -> String {
    "assets/images/photo6.jpeg".to_string()
}

pub(crate) fn default_gallery_images() -> Vec<String> {
    (1..=6)
        .map(|i| format!("assets/images/photo{i}.jpeg"))
        .collect()
}

pub(crate) fn default_music_path() -> String {
    "assets/music/wedding-music.ogg".to_string()
}

pub(crate) fn default_typing_speed_ms() -> u64 {
    35
}

pub(crate) fn default_typing_pause_ms() -> u64 {
    1200
}
