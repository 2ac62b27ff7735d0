use super::messages::Message;
use super::state::{
    App, DecorField, HeartSeed, RsvpStage, GALLERY_PANEL_HEIGHT, GALLERY_PANEL_WIDTH,
    GALLERY_SCROLL_ID, HEART_BURST_MS, MAIN_SCROLL_ID, firework_pose,
};
use crate::parallax::Transform;
use iced::alignment::Horizontal;
use iced::mouse::Cursor;
use iced::widget::canvas::{Frame, Geometry, Path, Stroke};
use iced::widget::{
    Column, Row, button, canvas, center, column, container, image, mouse_area, opaque, row,
    scrollable, stack, text, text_input,
};
use iced::{Color, Element, Length, Padding, Point, Rectangle, Renderer, Size, Theme, Vector};
use std::time::Duration;

const ACCENT: Color = Color::from_rgb(0.86, 0.16, 0.44);
const ACCENT_SOFT: Color = Color::from_rgb(0.95, 0.55, 0.68);
const INK_MUTED: Color = Color::from_rgb(0.45, 0.40, 0.42);
const BACKDROP: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.45,
};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let base: Element<'_, Message> = if self.letter.is_opened() {
            self.invitation_page()
        } else {
            self.sealed_letter()
        };

        let mut layers = stack![base];
        if matches!(self.rsvp.stage, RsvpStage::Open | RsvpStage::Success) {
            layers = layers.push(self.rsvp_overlay());
        }
        layers = layers.push(
            canvas(PetalLayer { field: &self.decor })
                .width(Length::Fill)
                .height(Length::Fill),
        );
        if let Some(started) = self.rsvp.burst_started {
            let elapsed = self.animation_now.saturating_duration_since(started);
            if self.rsvp.is_success() && elapsed < Duration::from_millis(HEART_BURST_MS) {
                layers = layers.push(
                    canvas(HeartLayer {
                        seeds: &self.rsvp.burst,
                        elapsed,
                    })
                    .width(Length::Fill)
                    .height(Length::Fill),
                );
            }
        }
        layers.into()
    }

    fn sealed_letter(&self) -> Element<'_, Message> {
        let card = column![
            image(image::Handle::from_path(&self.config.letter_image))
                .width(Length::Fixed(320.0))
                .height(Length::Fixed(220.0))
                .content_fit(iced::ContentFit::Cover),
            text("A letter is waiting for you").size(26).color(ACCENT),
            text("From the two of us, with love").size(15).color(INK_MUTED),
            button(text("Open the invitation").size(16))
                .on_press(Message::OpenLetter)
                .padding([10, 24]),
        ]
        .spacing(18)
        .align_x(Horizontal::Center);

        center(card).into()
    }

    fn invitation_page(&self) -> Element<'_, Message> {
        let page: Column<'_, Message> = column![
            self.hero_section(),
            self.details_section(),
            self.notes_section(),
            self.gallery_section(),
            self.final_section(),
        ]
        .spacing(56)
        .width(Length::Fill)
        .align_x(Horizontal::Center);

        scrollable(page)
            .on_scroll(|viewport| Message::Scrolled {
                offset: viewport.relative_offset(),
                viewport_height: viewport.bounds().height,
                content_height: viewport.content_bounds().height,
            })
            .id(MAIN_SCROLL_ID.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn hero_section(&self) -> Element<'_, Message> {
        let names = row![
            text(self.config.couple_first.as_str()).size(34).color(ACCENT),
            text("&").size(26).color(ACCENT_SOFT),
            text(self.config.couple_second.as_str()).size(34).color(ACCENT),
        ]
        .spacing(16)
        .align_y(iced::alignment::Vertical::Center);

        let mut actions = row![
            button(text("View details").size(15))
                .on_press(Message::ScrollToDetails)
                .padding([10, 22]),
            button(text("RSVP").size(15))
                .on_press(Message::OpenRsvp)
                .style(button::secondary)
                .padding([10, 22]),
        ]
        .spacing(14);
        if let Some(music) = &self.music {
            let label = if music.is_paused() {
                "Play music"
            } else {
                "Pause music"
            };
            actions = actions.push(
                button(text(label).size(15))
                    .on_press(Message::ToggleMusic)
                    .style(button::text)
                    .padding([10, 12]),
            );
        }

        column![
            image(image::Handle::from_path(&self.config.hero_image))
                .width(Length::Fill)
                .height(Length::Fixed(420.0))
                .content_fit(iced::ContentFit::Cover),
            text("We joyfully invite you").size(15).color(INK_MUTED),
            text("to celebrate our wedding").size(40).color(ACCENT),
            names,
            actions,
        ]
        .spacing(14)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
    }

    fn details_section(&self) -> Element<'_, Message> {
        let Transform {
            rotation_deg,
            offset_y,
        } = self.scroll.parallax;

        let ornament = canvas(OrnamentLayer { rotation_deg })
            .width(Length::Fixed(200.0))
            .height(Length::Fixed(240.0));

        // Vertical padding absorbs the negative half of the offset range.
        let photo = container(
            image(image::Handle::from_path(&self.config.details_image))
                .width(Length::Fixed(280.0))
                .height(Length::Fixed(360.0))
                .content_fit(iced::ContentFit::Cover),
        )
        .padding(Padding {
            top: 30.0 + offset_y,
            bottom: 30.0 - offset_y,
            ..Padding::ZERO
        });

        let typed = container(text(self.typing.displayed()).size(18).color(ACCENT))
            .height(Length::Fixed(56.0));

        let parts = self.countdown.parts();
        let countdown = row![
            countdown_cell(parts.days, "days"),
            countdown_cell(parts.hours, "hours"),
            countdown_cell(parts.minutes, "minutes"),
            countdown_cell(parts.seconds, "seconds"),
        ]
        .spacing(22);

        let mut lines: Column<'_, Message> = Column::new().spacing(6);
        for line in &self.config.detail_lines {
            lines = lines.push(text(line.as_str()).size(15).color(INK_MUTED));
        }

        let info = column![
            text("It's all in the details").size(28).color(ACCENT),
            typed,
            text(self.config.venue_name.as_str()).size(18),
            text(self.config.venue_address.as_str()).size(14).color(INK_MUTED),
            lines,
            text("Counting down to the day").size(14).color(INK_MUTED),
            countdown,
            row![
                button(text("Open the map").size(14))
                    .on_press(Message::OpenMap)
                    .style(button::secondary)
                    .padding([8, 18]),
                button(text("RSVP").size(14))
                    .on_press(Message::OpenRsvp)
                    .padding([8, 18]),
            ]
            .spacing(12),
        ]
        .spacing(14)
        .max_width(460);

        row![ornament, photo, info]
            .spacing(32)
            .align_y(iced::alignment::Vertical::Center)
            .into()
    }

    fn notes_section(&self) -> Element<'_, Message> {
        let mut notes: Column<'_, Message> = Column::new().spacing(10);
        notes = notes.push(text("A few gentle notes").size(28).color(ACCENT));
        for guideline in &self.config.guidelines {
            notes = notes.push(
                row![
                    text("•").size(15).color(ACCENT_SOFT),
                    text(guideline.as_str()).size(15).color(INK_MUTED),
                ]
                .spacing(10),
            );
        }

        row![
            image(image::Handle::from_path(&self.config.notes_image))
                .width(Length::Fixed(300.0))
                .height(Length::Fixed(380.0))
                .content_fit(iced::ContentFit::Cover),
            notes.max_width(460),
        ]
        .spacing(36)
        .align_y(iced::alignment::Vertical::Center)
        .into()
    }

    fn gallery_section(&self) -> Element<'_, Message> {
        let current = self.gallery.current();
        let count = self.gallery.len();

        let mut strip: Row<'_, Message> = Row::new();
        for (idx, path) in self.gallery.images().iter().enumerate() {
            // The settled panel gets its full height back.
            let inset = if idx == current && self.gallery.settled_at(idx) {
                0.0
            } else {
                16.0
            };
            strip = strip.push(
                container(
                    image(image::Handle::from_path(path))
                        .width(Length::Fixed(GALLERY_PANEL_WIDTH - 2.0 * inset))
                        .height(Length::Fixed(GALLERY_PANEL_HEIGHT - 2.0 * inset))
                        .content_fit(iced::ContentFit::Cover),
                )
                .width(Length::Fixed(GALLERY_PANEL_WIDTH))
                .height(Length::Fixed(GALLERY_PANEL_HEIGHT))
                .align_x(Horizontal::Center)
                .align_y(iced::alignment::Vertical::Center),
            );
        }

        let strip = scrollable(strip)
            .direction(scrollable::Direction::Horizontal(
                scrollable::Scrollbar::new().width(0).scroller_width(0),
            ))
            .on_scroll(|viewport| Message::GalleryScrolled {
                offset_x: viewport.absolute_offset().x,
                viewport_width: viewport.bounds().width,
            })
            .id(GALLERY_SCROLL_ID.clone())
            .width(Length::Fixed(GALLERY_PANEL_WIDTH))
            .height(Length::Fixed(GALLERY_PANEL_HEIGHT));

        let prev_button = if current > 0 {
            button(text("Previous").size(14)).on_press(Message::GalleryPrev)
        } else {
            button(text("Previous").size(14))
        };
        let next_button = if current + 1 < count {
            button(text("Next").size(14)).on_press(Message::GalleryNext)
        } else {
            button(text("Next").size(14))
        };

        let mut dots: Row<'_, Message> = Row::new().spacing(8);
        for idx in 0..count {
            let dot = button(text("•").size(18).color(if idx == current {
                ACCENT
            } else {
                ACCENT_SOFT
            }))
            .style(button::text)
            .padding(2)
            .on_press(Message::GalleryGoTo(idx));
            dots = dots.push(dot);
        }

        column![
            text("Our album").size(28).color(ACCENT),
            text("Swipe or step through the moments").size(14).color(INK_MUTED),
            strip,
            row![prev_button, dots, next_button]
                .spacing(20)
                .align_y(iced::alignment::Vertical::Center),
        ]
        .spacing(14)
        .align_x(Horizontal::Center)
        .into()
    }

    fn final_section(&self) -> Element<'_, Message> {
        let fireworks = container(
            canvas(FireworkLayer {
                elapsed: self.decor.elapsed,
            })
            .width(Length::Fixed(140.0))
            .height(Length::Fixed(140.0)),
        )
        .width(Length::Fill)
        .align_x(Horizontal::Right)
        .padding(Padding {
            right: 32.0,
            ..Padding::ZERO
        });

        column![
            image(image::Handle::from_path(&self.config.final_image))
                .width(Length::Fill)
                .height(Length::Fixed(420.0))
                .content_fit(iced::ContentFit::Cover),
            text("See you on our big day").size(30).color(ACCENT),
            text("Your presence is the greatest gift of all")
                .size(15)
                .color(INK_MUTED),
            button(text("Back to top").size(14))
                .on_press(Message::BackToTop)
                .style(button::secondary)
                .padding([8, 20]),
            fireworks,
        ]
        .spacing(16)
        .padding(Padding {
            bottom: 48.0,
            ..Padding::ZERO
        })
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
    }

    fn rsvp_overlay(&self) -> Element<'_, Message> {
        let body: Element<'_, Message> = if self.rsvp.is_success() {
            column![
                text("Thank you!").size(26).color(ACCENT),
                text(format!(
                    "We can't wait to celebrate with you, {}.",
                    self.rsvp.guest_name.trim()
                ))
                .size(15)
                .color(INK_MUTED),
            ]
            .spacing(12)
            .align_x(Horizontal::Center)
            .into()
        } else {
            let confirm = if self.rsvp.form_valid() {
                button(text("Confirm").size(15)).on_press(Message::SubmitRsvp)
            } else {
                button(text("Confirm").size(15))
            };
            column![
                text("Will you join us?").size(24).color(ACCENT),
                text_input("Your name", &self.rsvp.guest_name)
                    .on_input(Message::RsvpNameChanged)
                    .padding(10),
                text_input("How many of you are coming?", &self.rsvp.party_size)
                    .on_input(Message::RsvpPartySizeChanged)
                    .padding(10),
                row![
                    button(text("Cancel").size(15))
                        .on_press(Message::CancelRsvp)
                        .style(button::secondary),
                    confirm,
                ]
                .spacing(12),
            ]
            .spacing(14)
            .align_x(Horizontal::Center)
            .into()
        };

        let card = container(body)
            .padding(28)
            .max_width(380)
            .style(container::rounded_box);

        opaque(
            mouse_area(center(opaque(card)).style(|_theme| container::Style {
                background: Some(BACKDROP.into()),
                ..container::Style::default()
            }))
            .on_press(Message::CancelRsvp),
        )
    }
}

fn countdown_cell<'a>(value: u64, label: &'a str) -> Element<'a, Message> {
    column![
        text(countdown_value(value)).size(30).color(ACCENT),
        text(label).size(12).color(INK_MUTED),
    ]
    .spacing(2)
    .align_x(Horizontal::Center)
    .into()
}

/// Countdown digits render as plain numbers, no zero padding.
fn countdown_value(value: u64) -> String {
    value.to_string()
}

struct PetalLayer<'a> {
    field: &'a DecorField,
}

impl canvas::Program<Message> for PetalLayer<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &(),
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let elapsed = self.field.elapsed;
        for petal in self.field.petals() {
            let Some(progress) = petal.fall_progress(elapsed) else {
                continue;
            };
            let pose = petal.pose(progress);
            let x = petal.x_percent / 100.0 * bounds.width;
            let y = pose.y_frac * bounds.height;
            frame.with_save(|frame| {
                frame.translate(Vector::new(x, y));
                frame.rotate(pose.rotation_deg.to_radians());
                frame.scale(pose.scale);
                let shape = Path::rounded_rectangle(
                    Point::new(-8.0, -8.0),
                    Size::new(16.0, 16.0),
                    6.0.into(),
                );
                frame.fill(
                    &shape,
                    Color {
                        a: pose.alpha,
                        ..ACCENT_SOFT
                    },
                );
            });
        }
        vec![frame.into_geometry()]
    }
}

struct HeartLayer<'a> {
    seeds: &'a [HeartSeed],
    elapsed: Duration,
}

impl canvas::Program<Message> for HeartLayer<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &(),
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let burst = Duration::from_millis(HEART_BURST_MS);
        let origin = Point::new(bounds.width / 2.0, bounds.height / 2.0);
        for seed in self.seeds {
            if self.elapsed < seed.delay {
                continue;
            }
            let local = (self.elapsed - seed.delay).as_secs_f32() / burst.as_secs_f32();
            if local >= 1.0 {
                continue;
            }
            let eased = 1.0 - (1.0 - local).powi(3);
            let x = origin.x + seed.drift_x * eased;
            let y = origin.y - seed.rise * eased;
            let alpha = 1.0 - local;
            frame.with_save(|frame| {
                frame.translate(Vector::new(x, y));
                draw_heart(frame, 9.0, Color { a: alpha, ..ACCENT });
            });
        }
        vec![frame.into_geometry()]
    }
}

// Two lobes and a point, drawn around the local origin.
fn draw_heart(frame: &mut Frame, radius: f32, color: Color) {
    let left = Path::circle(Point::new(-radius * 0.6, -radius * 0.4), radius * 0.62);
    let right = Path::circle(Point::new(radius * 0.6, -radius * 0.4), radius * 0.62);
    let tip = Path::new(|builder| {
        builder.move_to(Point::new(-radius * 1.18, -radius * 0.25));
        builder.line_to(Point::new(0.0, radius * 1.1));
        builder.line_to(Point::new(radius * 1.18, -radius * 0.25));
        builder.close();
    });
    frame.fill(&left, color);
    frame.fill(&right, color);
    frame.fill(&tip, color);
}

struct FireworkLayer {
    elapsed: Duration,
}

impl canvas::Program<Message> for FireworkLayer {
    type State = ();

    fn draw(
        &self,
        _state: &(),
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let pose = firework_pose(self.elapsed);
        let center = Point::new(bounds.width / 2.0, bounds.height / 2.0);
        let radius = bounds.width.min(bounds.height) / 2.0;
        frame.with_save(|frame| {
            frame.translate(Vector::new(center.x, center.y));
            frame.rotate(pose.rotation_deg.to_radians());
            frame.scale(pose.scale);
            let bright = Color::from_rgb(1.0, 1.0, 1.0);
            let blush = Color::from_rgb(1.0, 0.94, 0.96);
            draw_glow(
                frame,
                Point::new(-radius * 0.25, -radius * 0.25),
                radius * 0.55,
                bright,
                0.7 * pose.alpha,
            );
            draw_glow(
                frame,
                Point::new(radius * 0.25, radius * 0.25),
                radius * 0.45,
                blush,
                0.9 * pose.alpha,
            );
        });
        vec![frame.into_geometry()]
    }
}

// Concentric fills stand in for a radial falloff.
fn draw_glow(frame: &mut Frame, center: Point, radius: f32, color: Color, alpha: f32) {
    for (fraction, weight) in [(0.35, 0.5), (0.65, 0.25), (1.0, 0.12)] {
        let ring = Path::circle(center, radius * fraction);
        frame.fill(
            &ring,
            Color {
                a: alpha * weight,
                ..color
            },
        );
    }
}

struct OrnamentLayer {
    rotation_deg: f32,
}

impl canvas::Program<Message> for OrnamentLayer {
    type State = ();

    fn draw(
        &self,
        _state: &(),
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = Point::new(bounds.width / 2.0, bounds.height / 2.0);
        frame.with_save(|frame| {
            frame.translate(Vector::new(center.x, center.y));
            frame.rotate(self.rotation_deg.to_radians());
            let w = bounds.width * 0.6;
            let h = bounds.height * 0.6;
            let outer = Path::rounded_rectangle(
                Point::new(-w / 2.0, -h / 2.0),
                Size::new(w, h),
                12.0.into(),
            );
            let inner = Path::rounded_rectangle(
                Point::new(-w / 2.0 + 10.0, -h / 2.0 + 10.0),
                Size::new(w - 20.0, h - 20.0),
                8.0.into(),
            );
            frame.stroke(
                &outer,
                Stroke::default().with_color(ACCENT_SOFT).with_width(2.5),
            );
            frame.stroke(
                &inner,
                Stroke::default().with_color(ACCENT_SOFT).with_width(1.0),
            );
            draw_heart(frame, 12.0, ACCENT);
        });
        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn countdown_digits_have_no_zero_padding() {
        assert_eq!(countdown_value(0), "0");
        assert_eq!(countdown_value(7), "7");
        assert_eq!(countdown_value(59), "59");
    }
}
