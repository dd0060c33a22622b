use image::io::Reader as ImageReader;
use play_icon::shape::silhouette_corners;

fn main() {
    let Some(path) = std::env::args().nth(1) else {
        println!("Usage: inspect_icon <icon_path>");
        return;
    };

    let img = match ImageReader::open(&path).and_then(|reader| reader.with_guessed_format()) {
        Ok(reader) => match reader.decode() {
            Ok(img) => img,
            Err(err) => {
                eprintln!("Failed to decode {path}: {err}");
                std::process::exit(1);
            }
        },
        Err(err) => {
            eprintln!("Failed to open {path}: {err}");
            std::process::exit(1);
        }
    };

    let rgba_img = img.to_rgba8();
    let (width, height) = rgba_img.dimensions();

    println!("Checking silhouette in: {path}");
    println!("Image dimensions: {width}x{height}");
    println!("Color type: {:?}", img.color());

    let mut transparent_corners = 0;
    for (x, y) in silhouette_corners(width, height) {
        let alpha = rgba_img.get_pixel(x, y)[3];
        println!("  corner ({x}, {y}) alpha = {alpha}");
        if alpha == 0 {
            transparent_corners += 1;
        }
    }

    let center = rgba_img.get_pixel(width / 2, height / 2);
    println!(
        "Center pixel RGBA: [{}, {}, {}, {}]",
        center[0], center[1], center[2], center[3]
    );

    if transparent_corners == 4 && center[3] == 255 {
        println!("✓ Rounded silhouette detected");
    } else {
        println!("⚠ Icon does not look like a rounded square");
    }
}
