use retro_pixel::{
    render::{Bitmap, Croppable, Orientation, Pixel, SheetLayout, Spritesheet},
    util::Rect,
    PixelError,
};

/// Every pixel carries its own coordinates so slices can be told apart.
fn coded(w: u32, h: u32) -> Bitmap {
    let mut b = Bitmap::new(w, h);
    for y in 0..h {
        for x in 0..w {
            b.set_pixel(x, y, Pixel::rgba(x as u8, y as u8, 0, 255));
        }
    }
    b
}

#[test]
fn slices_match_source_crops() {
    let src = coded(32, 16);
    let sheet = Spritesheet::new(src.clone(), SheetLayout::new(16, 16)).unwrap();
    assert_eq!((sheet.columns(), sheet.rows()), (2, 1));
    assert_eq!(**sheet.cell(0, 0).unwrap(), src.crop(0, 0, 16, 16).unwrap());
    assert_eq!(
        sheet.crop(1, 0).unwrap().into_bitmap(),
        src.crop(16, 0, 16, 16).unwrap()
    );
}

#[test]
fn offsets_and_gaps_shift_cells() {
    let src = coded(40, 30);
    let layout = SheetLayout::new(8, 8).offset(2, 3).gaps(2, 1);
    let sheet = Spritesheet::new(src.clone(), layout).unwrap();
    // (40-2)/(8+2) = 3 columns, (30-3)/(8+1) = 3 rows
    assert_eq!((sheet.columns(), sheet.rows()), (3, 3));
    let cell = sheet.crop(2, 1).unwrap();
    assert_eq!(cell.get_pixel(0, 0), Some(Pixel::rgba(22, 12, 0, 255)));
    assert_eq!(cell.into_bitmap(), src.crop(22, 12, 8, 8).unwrap());
}

#[test]
fn cells_are_independent_copies() {
    let sheet = Spritesheet::new(coded(16, 8), SheetLayout::new(8, 8)).unwrap();
    let mut own = sheet.crop(0, 0).unwrap().into_bitmap();
    own.set_pixel(0, 0, Pixel::WHITE);
    assert_eq!(
        sheet.crop(0, 0).unwrap().get_pixel(0, 0),
        Some(Pixel::rgba(0, 0, 0, 255))
    );
    assert_eq!(sheet.source().get_pixel(0, 0), Some(Pixel::rgba(0, 0, 0, 255)));
}

#[test]
fn out_of_grid_lookups_fail() {
    let sheet = Spritesheet::new(coded(32, 16), SheetLayout::new(16, 16)).unwrap();
    for (c, r) in [(2, 0), (0, 1), (u32::MAX, 0)] {
        assert!(matches!(sheet.crop(c, r), Err(PixelError::OutOfBounds(_))));
    }
}

#[test]
fn pixel_perfect_cells_carry_bounds() {
    let mut src = Bitmap::new(16, 8);
    src.set_pixel(3, 2, Pixel::RED);
    src.set_pixel(4, 5, Pixel::RED);
    let layout = SheetLayout::new(8, 8).pixel_perfect(true);
    let sheet = Spritesheet::new(src, layout).unwrap();
    assert_eq!(sheet.crop(0, 0).unwrap().bounds(), Some(Rect::new(3, 2, 2, 4)));
    // second cell is empty: bounds fall back to the full cell
    assert_eq!(sheet.crop(1, 0).unwrap().bounds(), Some(Rect::new(0, 0, 8, 8)));

    let plain = Spritesheet::new(coded(8, 8), SheetLayout::new(8, 8)).unwrap();
    assert_eq!(plain.crop(0, 0).unwrap().bounds(), None);
}

#[test]
fn sprite_crop_keeps_bounds_mode() {
    let mut src = Bitmap::new(8, 8);
    src.set_pixel(5, 5, Pixel::RED);
    let sheet = Spritesheet::new(src, SheetLayout::new(8, 8).pixel_perfect(true)).unwrap();
    let part = sheet.crop(0, 0).unwrap().crop_rect(4, 4, 4, 4).unwrap();
    assert_eq!(part.bounds(), Some(Rect::new(1, 1, 1, 1)));
}

#[test]
fn vertical_strip_walks_column_zero() {
    let sheet = Spritesheet::new(coded(8, 24), SheetLayout::new(8, 8)).unwrap();
    let anim = sheet
        .generate_strip_animation("drop", Orientation::Vertical, 40)
        .unwrap();
    assert_eq!(anim.len(), 3);
    for (i, f) in anim.frames().iter().enumerate() {
        assert_eq!(f.duration_ms(), 40);
        assert_eq!(f.bitmap().get_pixel(0, 0), Some(Pixel::rgba(0, i as u8 * 8, 0, 255)));
    }
}

#[test]
fn timed_animation_keeps_per_frame_durations() {
    let sheet = Spritesheet::new(coded(24, 8), SheetLayout::new(8, 8)).unwrap();
    let anim = sheet
        .generate_animation_timed("idle", &[100, 200, 100], &[(2, 0), (0, 0), (1, 0)])
        .unwrap();
    assert_eq!(anim.name(), "idle");
    let ds: Vec<u32> = anim.frames().iter().map(|f| f.duration_ms()).collect();
    assert_eq!(ds, vec![100, 200, 100]);
    assert_eq!(
        anim.frame(0).unwrap().bitmap().get_pixel(0, 0),
        Some(Pixel::rgba(16, 0, 0, 255))
    );
}
