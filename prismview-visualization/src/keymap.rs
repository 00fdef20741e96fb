//! Translation from winit physical keys to scene keys

use prismview_core::Key;
use winit::keyboard::{KeyCode, PhysicalKey};

/// Map a physical key to the scene key it drives, if any
///
/// Physical codes are used so the bindings stay on the same keys regardless
/// of keyboard layout.
pub fn map_physical_key(key: PhysicalKey) -> Option<Key> {
    match key {
        PhysicalKey::Code(code) => map_key_code(code),
        PhysicalKey::Unidentified(_) => None,
    }
}

pub fn map_key_code(code: KeyCode) -> Option<Key> {
    let key = match code {
        KeyCode::KeyQ => Key::Q,
        KeyCode::KeyE => Key::E,
        KeyCode::KeyA => Key::A,
        KeyCode::KeyD => Key::D,
        KeyCode::KeyW => Key::W,
        KeyCode::KeyS => Key::S,
        KeyCode::KeyM => Key::M,
        KeyCode::KeyB => Key::B,
        KeyCode::KeyJ => Key::J,
        KeyCode::KeyN => Key::N,
        KeyCode::KeyH => Key::H,
        KeyCode::KeyK => Key::K,
        KeyCode::Digit1 | KeyCode::Numpad1 => Key::Digit1,
        KeyCode::Digit2 | KeyCode::Numpad2 => Key::Digit2,
        KeyCode::KeyR => Key::R,
        KeyCode::KeyT => Key::T,
        KeyCode::Escape => Key::Escape,
        _ => return None,
    };
    Some(key)
}
