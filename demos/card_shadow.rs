use layer_shadow::color;
use layer_shadow::math::{point, rect, vector};
use layer_shadow::path::Path;
use layer_shadow::{apply_owner_shadow, ShadowConfig, ShadowOwner, ShadowStyler, View};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("trace")).init();

    let mut card = View::new(rect(0.0, 0.0, 320.0, 180.0));
    let mut avatar = View::new(rect(16.0, 16.0, 48.0, 48.0));

    // A soft card shadow that follows the card's own bounds.
    let card_shadow = ShadowConfig::new()
        .with_color(color::from_rgba8(10, 13, 18, 255))
        .with_opacity(0.1)
        .with_offset(vector(0.0, 4.0))
        .with_radius(6.0);
    apply_owner_shadow(&mut card, &card_shadow);
    log::info!("card: {:?}", card.surface().shadow());

    // The avatar is round, so give it an explicit outline.
    let avatar_shadow = ShadowStyler::new(
        ShadowConfig::new()
            .with_opacity(0.3)
            .with_path(Path::circle(point(24.0, 24.0), 24.0)),
    );
    avatar_shadow.apply_to_owner(&mut avatar);
    log::info!("avatar: {:?}", avatar.surface().shadow());

    apply_owner_shadow(&mut card, None);
    log::info!("card after clear: {:?}", card.surface().shadow());
}
