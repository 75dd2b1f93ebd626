use pretty_assertions::assert_eq;
use sdl2::rect::Rect;
use strum::IntoEnumIterator;
use tilemap_demo::asset::Asset;
use tilemap_demo::map::direction::Facing;
use tilemap_demo::texture::sprite_sheet::{frame_rect, SpriteSheet};

#[test]
fn test_frame_rect_rows_follow_facing() {
    let test_cases = [
        (Facing::Up, 0),
        (Facing::Right, 64),
        (Facing::Down, 128),
        (Facing::Left, 192),
    ];

    for (facing, y) in test_cases {
        assert_eq!(frame_rect(facing, 2), Rect::new(96, y, 48, 64), "{facing:?}");
    }
}

#[test]
fn test_frame_rect_idle_uses_idle_frame_of_down_row() {
    for frame in 0..3 {
        assert_eq!(frame_rect(Facing::Idle, frame), Rect::new(48, 128, 48, 64));
    }
}

#[test]
fn test_frame_rect_wraps_out_of_range_frames() {
    assert_eq!(frame_rect(Facing::Right, 3), frame_rect(Facing::Right, 0));
    assert_eq!(frame_rect(Facing::Left, 7), frame_rect(Facing::Left, 1));
}

#[test]
fn test_frame_rect_stays_on_sheet() {
    // Sheets are 144x256
    for facing in Facing::iter() {
        for frame in 0..6 {
            let rect = frame_rect(facing, frame);
            assert!(rect.right() <= 144 && rect.bottom() <= 256, "{facing:?} {frame}");
        }
    }
}

#[test]
fn test_each_sheet_has_its_own_asset() {
    let assets: Vec<Asset> = SpriteSheet::iter().map(SpriteSheet::asset).collect();
    assert_eq!(assets, vec![Asset::WizardSheet, Asset::SoldierSheet]);
}
