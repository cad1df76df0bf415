// Render the color guide of an image as HTML.
//
// Usage: color-guide-tools [colors.hjson] [guide.html]
//
// The HJSON file describes the source and its extracted colors:
//
//     {
//       source: { x: 0, y: 0, width: 640, height: 480,
//                 cornerRadius: 8, image: "photo.jpg" }
//       dominantColor: [0.18, 0.31, 0.42]
//       suggestedTextColors: [[1, 1, 1]]
//       palette: [[0.9, 0.8, 0.6], [0.2, 0.3, 0.4]]
//       fonts: [{ family: "Roboto", style: "Bold" }]
//     }
//
// Color components are in [0, 1].  `fonts` lists the fonts assumed
// available (none by default, so the fallback font is used).

use std::{string::String,
          env,
          fs::{self, File},
          io::{BufWriter, prelude::*},
          error::Error};
use serde_hjson::{Map, Value::{self, *}};
use color_guide::{generate_color_guide_blocking, host, FontName,
                  GuideOptions, ImagePaint, SourceRect, StaticFonts,
                  UIColorData, RGB};

mod html;

fn number(v: Option<&Value>, default: f64) -> f64 {
    match v {
        Some(F64(x)) => *x,
        Some(I64(x)) => *x as f64,
        Some(U64(x)) => *x as f64,
        None => default,
        Some(v) => panic!("color-guide-tools: {v:?} is not a number"),
    }
}

fn color(v: &Value) -> RGB<f64> {
    match v {
        Array(c) if c.len() == 3 => {
            RGB::new(number(c.first(), 0.), number(c.get(1), 0.),
                     number(c.get(2), 0.))
        }
        _ => panic!("color-guide-tools: {v:?} is not a color [r, g, b]"),
    }
}

fn colors(v: Option<&Value>) -> Vec<RGB<f64>> {
    match v {
        Some(Array(a)) => a.iter().map(color).collect(),
        None => vec![],
        Some(v) => panic!("color-guide-tools: {v:?} is not a list of colors"),
    }
}

fn string<'a>(m: &'a Map<String, Value>, key: &str) -> &'a str {
    match m.get(key) {
        Some(String(s)) => s,
        v => panic!("color-guide-tools: {key} = {v:?} is not a string"),
    }
}

fn fonts(v: Option<&Value>) -> Vec<FontName> {
    match v {
        Some(Array(a)) => a.iter().map(|f| match f {
            Object(m) => FontName::new(string(m, "family"), string(m, "style")),
            _ => panic!("color-guide-tools: {f:?} is not a font") }).collect(),
        None => vec![],
        Some(v) => panic!("color-guide-tools: {v:?} is not a list of fonts"),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    let input = args.next().unwrap_or_else(|| "colors.hjson".to_string());
    let output = args.next().unwrap_or_else(|| "guide.html".to_string());

    let json: Value = serde_hjson::from_str(&fs::read_to_string(&input)?)?;
    let m = match &json {
        Object(m) => m,
        _ => panic!("color-guide-tools: {input} must contain an object") };
    let src = match m.get("source") {
        Some(Object(s)) => s,
        _ => panic!("color-guide-tools: missing \"source\"") };

    let image = ImagePaint::new(string(src, "image"));
    let source = SourceRect::new(number(src.get("width"), 0.),
                                 number(src.get("height"), 0.), &image)
        .at(number(src.get("x"), 0.), number(src.get("y"), 0.))
        .corner_radius(number(src.get("cornerRadius"), 0.));
    let data = UIColorData::new(match m.get("dominantColor") {
        Some(c) => color(c),
        None => panic!("color-guide-tools: missing \"dominantColor\"") })
        .suggested_text_colors(colors(m.get("suggestedTextColors")))
        .palette(colors(m.get("palette")));
    let fonts = StaticFonts::new(fonts(m.get("fonts")));

    let guide = generate_color_guide_blocking(&source, &data, &fonts,
                                              &GuideOptions::default())?;
    let mut scene = html::HtmlHost::default();
    let root = host::materialize(&mut scene, &guide)?;

    let mut fh = BufWriter::new(File::create(&output)?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>Color guide: {input}</title>\n\
                  </head>\n\
                  <body style=\"position: relative\">\n  \
                  <div style=\"position: absolute; left: {}px; top: {}px; \
                  width: {}px; height: {}px; border-radius: {}px; \
                  background: url(&quot;{}&quot;) center / cover\"></div>",
             source.x, source.y, source.width, source.height,
             source.corner_radius, image.image_hash())?;
    write!(fh, "{}", scene.to_html(root))?;
    writeln!(fh, "</body>\n\
                  </html>")?;
    Ok(())
}
