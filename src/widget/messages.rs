//! Bubble text: periodic greetings and tap-triggered tips

use rand::Rng;

/// Rotated every interval while the page is open
pub const ROTATION: &[&str] = &[
    "¡Hola! 🤖",
    "¿Necesitas ayuda? 💡",
    "¡Crea posts increíbles! ✨",
    "¿Listo para crear? 🚀",
    "Estoy aquí 😊",
];

/// Shown for a few seconds after a tap on the bot
pub const TIPS: &[&str] = &[
    "💡 Tip: Múltiples redes sociales",
    "🎨 Consejo: Activa imágenes",
    "🌍 Recuerda: Cambia idioma",
    "🚀 Truco: Varía el tono",
];

pub fn pick_rotation<R: Rng>(rng: &mut R) -> &'static str {
    ROTATION[rng.random_range(0..ROTATION.len())]
}

pub fn pick_tip<R: Rng>(rng: &mut R) -> &'static str {
    TIPS[rng.random_range(0..TIPS.len())]
}

/// What the tooltip bubble currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayMessage {
    pub text: &'static str,
    /// Bubble is open (hover or tip)
    pub bubble_visible: bool,
    /// A rotation just happened; drives the `new-message` pulse
    pub highlighted: bool,
}

impl Default for DisplayMessage {
    fn default() -> Self {
        Self {
            text: ROTATION[0],
            bubble_visible: false,
            highlighted: false,
        }
    }
}

#[cfg(test)]
impl DisplayMessage {
    pub fn is_tip(&self) -> bool {
        TIPS.contains(&self.text)
    }
}
