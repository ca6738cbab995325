use raylib::prelude::*;

use crate::constants::*;
use crate::deck::Deck;
use crate::navigator::SlideNavigator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    Advance,
    Retreat,
}

/// Arrow-key to command mapping. The widget holds one of these only while it
/// is mounted, so key events reaching an unmounted widget go nowhere and a
/// re-mount cannot stack a second binding on top of the first.
pub struct KeyBindings;

impl KeyBindings {
    pub fn translate(&self, key: KeyboardKey) -> Option<NavCommand> {
        match key {
            KeyboardKey::KEY_RIGHT => Some(NavCommand::Advance),
            KeyboardKey::KEY_LEFT => Some(NavCommand::Retreat),
            _ => None,
        }
    }
}

/// Positions of everything the widget draws, derived from the screen size.
pub struct Layout {
    pub card: Rectangle,
    pub image: Rectangle,
    pub prev_button: Rectangle,
    pub next_button: Rectangle,
    pub indicator_center_x: i32,
    pub controls_y: i32,
}

/// Card height below the image: padding, title, gap, two body lines, padding.
const TEXT_BLOCK_HEIGHT: i32 =
    CARD_PADDING + TITLE_FONT_SIZE + 16 + 2 * (BODY_FONT_SIZE + BODY_LINE_SPACING) + CARD_PADDING;

pub fn layout(screen_width: i32, screen_height: i32) -> Layout {
    let card_height = CARD_IMAGE_HEIGHT + TEXT_BLOCK_HEIGHT;
    let controls_height = CONTROLS_MARGIN + BUTTON_SIZE;
    let card_x = (screen_width - CARD_WIDTH) / 2;
    let card_y = (screen_height - card_height - controls_height) / 2;

    let card = Rectangle::new(
        card_x as f32,
        card_y as f32,
        CARD_WIDTH as f32,
        card_height as f32,
    );
    let image = Rectangle::new(
        card.x,
        card.y,
        CARD_WIDTH as f32,
        CARD_IMAGE_HEIGHT as f32,
    );

    let controls_y = card_y + card_height + CONTROLS_MARGIN;
    let center_x = screen_width / 2;
    let half_span = BUTTON_GAP + BUTTON_SIZE;
    let prev_button = Rectangle::new(
        (center_x - half_span - BUTTON_GAP) as f32,
        controls_y as f32,
        BUTTON_SIZE as f32,
        BUTTON_SIZE as f32,
    );
    let next_button = Rectangle::new(
        (center_x + half_span + BUTTON_GAP - BUTTON_SIZE) as f32,
        controls_y as f32,
        BUTTON_SIZE as f32,
        BUTTON_SIZE as f32,
    );

    Layout {
        card,
        image,
        prev_button,
        next_button,
        indicator_center_x: center_x,
        controls_y,
    }
}

/// Crop rectangle selecting the part of a texture that fills `dest` edge to
/// edge while keeping the texture's aspect ratio (center crop).
pub fn cover_source_rect(tex_width: f32, tex_height: f32, dest: &Rectangle) -> Rectangle {
    let dest_ratio = dest.width / dest.height;
    let tex_ratio = tex_width / tex_height;
    if tex_ratio > dest_ratio {
        // Texture is wider than the destination: crop the sides.
        let src_width = tex_height * dest_ratio;
        Rectangle::new((tex_width - src_width) / 2.0, 0.0, src_width, tex_height)
    } else {
        // Texture is taller: crop top and bottom.
        let src_height = tex_width / dest_ratio;
        Rectangle::new(0.0, (tex_height - src_height) / 2.0, tex_width, src_height)
    }
}

/// Greedy word wrap against a pixel budget. `measure` reports the rendered
/// width of a candidate line; words are never split.
pub fn wrap_text(text: &str, max_width: i32, measure: impl Fn(&str) -> i32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if line.is_empty() {
            line.push_str(word);
            continue;
        }
        let candidate = format!("{line} {word}");
        if measure(&candidate) <= max_width {
            line = candidate;
        } else {
            lines.push(std::mem::take(&mut line));
            line.push_str(word);
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// The slider widget: the navigator plus its input surface.
///
/// Buttons keep their semantic labels ("Previous slide" / "Next slide") even
/// though only the chevron glyph is drawn.
pub struct SliderWidget {
    navigator: SlideNavigator,
    bindings: Option<KeyBindings>,
}

impl SliderWidget {
    /// A new widget starts mounted, with its key bindings installed.
    pub fn new(deck_len: usize) -> Self {
        Self {
            navigator: SlideNavigator::new(deck_len),
            bindings: Some(KeyBindings),
        }
    }

    pub fn navigator(&self) -> &SlideNavigator {
        &self.navigator
    }

    pub fn is_mounted(&self) -> bool {
        self.bindings.is_some()
    }

    /// Release the key bindings. Key events dispatched after this are ignored.
    pub fn unmount(&mut self) {
        if self.bindings.take().is_some() {
            log::info!("keyboard bindings released");
        }
    }

    /// Re-install the key bindings. Idempotent: a mounted widget stays at
    /// exactly one binding.
    pub fn mount(&mut self) {
        if self.bindings.is_none() {
            self.bindings = Some(KeyBindings);
            log::info!("keyboard bindings installed");
        }
    }

    pub fn dispatch(&mut self, command: NavCommand) {
        match command {
            NavCommand::Advance => self.navigator.advance(),
            NavCommand::Retreat => self.navigator.retreat(),
        }
    }

    /// Route one key press through the bindings, if installed. Returns true
    /// when the key triggered a transition.
    pub fn handle_key(&mut self, key: KeyboardKey) -> bool {
        let Some(bindings) = &self.bindings else {
            return false;
        };
        match bindings.translate(key) {
            Some(command) => {
                self.dispatch(command);
                true
            }
            None => false,
        }
    }

    /// Route one mouse click; returns true when it hit a nav button.
    pub fn handle_click(&mut self, point: Vector2, layout: &Layout) -> bool {
        if layout.prev_button.check_collision_point_rec(point) {
            self.dispatch(NavCommand::Retreat);
            true
        } else if layout.next_button.check_collision_point_rec(point) {
            self.dispatch(NavCommand::Advance);
            true
        } else {
            false
        }
    }

    /// Draw the card for the current slide plus the controls row.
    ///
    /// `textures` is indexed in step with the deck; a missing texture renders
    /// as a placeholder with the slide title as alternate text.
    pub fn draw(&self, d: &mut RaylibDrawHandle, deck: &Deck, textures: &[Option<Texture2D>]) {
        let layout = layout(d.get_screen_width(), d.get_screen_height());
        let index = self.navigator.current();
        let slide = deck.slide(index);

        d.draw_rectangle_rounded(layout.card, CARD_ROUNDNESS, 8, CARD_COLOR);

        match textures.get(index).and_then(|t| t.as_ref()) {
            Some(texture) => {
                let source =
                    cover_source_rect(texture.width() as f32, texture.height() as f32, &layout.image);
                d.draw_texture_pro(
                    texture,
                    source,
                    layout.image,
                    Vector2::zero(),
                    0.0,
                    Color::WHITE,
                );
            }
            None => {
                // Alternate text stands in for the unavailable image.
                d.draw_rectangle_rec(layout.image, PLACEHOLDER_COLOR);
                let alt_width = d.measure_text(&slide.title, BODY_FONT_SIZE);
                d.draw_text(
                    &slide.title,
                    layout.image.x as i32 + (CARD_WIDTH - alt_width) / 2,
                    (layout.image.y + layout.image.height / 2.0) as i32 - BODY_FONT_SIZE / 2,
                    BODY_FONT_SIZE,
                    Color::LIGHTGRAY,
                );
            }
        }

        // Readability gradient over the lower half of the image.
        d.draw_rectangle_gradient_v(
            layout.image.x as i32,
            (layout.image.y + layout.image.height / 2.0) as i32,
            layout.image.width as i32,
            (layout.image.height / 2.0) as i32,
            Color::new(0, 0, 0, 0),
            Color::new(0, 0, 0, 153),
        );

        let text_x = layout.card.x as i32 + CARD_PADDING;
        let mut text_y = (layout.image.y + layout.image.height) as i32 + CARD_PADDING;
        d.draw_text(&slide.title, text_x, text_y, TITLE_FONT_SIZE, TITLE_COLOR);
        text_y += TITLE_FONT_SIZE + 16;

        let body_width = CARD_WIDTH - 2 * CARD_PADDING;
        for line in wrap_text(&slide.content, body_width, |s| {
            d.measure_text(s, BODY_FONT_SIZE)
        }) {
            d.draw_text(&line, text_x, text_y, BODY_FONT_SIZE, BODY_COLOR);
            text_y += BODY_FONT_SIZE + BODY_LINE_SPACING;
        }

        let mouse = d.get_mouse_position();
        draw_button(d, &layout.prev_button, "<", mouse);
        draw_button(d, &layout.next_button, ">", mouse);

        let label = self.navigator.position_label();
        let label_width = d.measure_text(&label, INDICATOR_FONT_SIZE);
        d.draw_text(
            &label,
            layout.indicator_center_x - label_width / 2,
            layout.controls_y + (BUTTON_SIZE - INDICATOR_FONT_SIZE) / 2,
            INDICATOR_FONT_SIZE,
            TITLE_COLOR,
        );
    }
}

fn draw_button(d: &mut RaylibDrawHandle, rect: &Rectangle, glyph: &str, mouse: Vector2) {
    let fill = if rect.check_collision_point_rec(mouse) {
        BUTTON_HOVER_COLOR
    } else {
        BUTTON_COLOR
    };
    let center_x = rect.x + rect.width / 2.0;
    let center_y = rect.y + rect.height / 2.0;
    d.draw_circle(center_x as i32, center_y as i32, rect.width / 2.0, fill);

    let glyph_width = d.measure_text(glyph, INDICATOR_FONT_SIZE);
    d.draw_text(
        glyph,
        center_x as i32 - glyph_width / 2,
        center_y as i32 - INDICATOR_FONT_SIZE / 2,
        INDICATOR_FONT_SIZE,
        BUTTON_GLYPH_COLOR,
    );
}
