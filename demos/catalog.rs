//! Build the ColorCET catalog from a directory of `CET-*.csv` tables
//! (default: `colorcet-maps/`) and write `colorcet.html` showing every
//! colormap, its grayscale rendition and the smoothed time per row.

use std::{collections::BTreeMap,
          env,
          fs::{self, File},
          io::{BufWriter, Write},
          error::Error,
          time::Instant};
use rgb::RGB8;
use colorcet_catalog::{Catalog, ColorRange, RGBColor, RollingAverage};

type Err = Box<dyn Error>;

fn css_string(c: RGB8) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

fn table_of_colors(fh: &mut impl Write, colors: &[RGB8],
                   width: u32, comment: &str) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\"><tr>")?;
    for &c in colors {
        writeln!(fh, "  <td style=\"width: {width}px; height: 30px; \
                      background-color: {}\"></td>",
                 css_string(c))?;
    }
    writeln!(fh, "<td rowspan=\"2\" style=\"padding-left: 7px\">\
                  {comment}</td></tr><tr>")?;
    for &c in colors {
        writeln!(fh, "  <td style=\"width: {width}px; height: 12px; \
                      background-color: {}\"></td>",
                 css_string(c.to_gray()))?;
    }
    writeln!(fh, "</tr></table><br/>")?;
    Ok(())
}

fn read_tables(dir: &str) -> Result<BTreeMap<String, String>, Err> {
    let mut tables = BTreeMap::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(n) if n.starts_with("CET-") && n.ends_with(".csv") => n,
            _ => continue };
        tables.insert(name.to_string(), fs::read_to_string(&path)?);
    }
    Ok(tables)
}

fn main() -> Result<(), Err> {
    let dir = env::args().nth(1).unwrap_or_else(|| "colorcet-maps".into());
    let tables = read_tables(&dir)?;

    let catalog = Catalog::build(&tables)?;

    let mut fh = BufWriter::new(File::create("colorcet.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>ColorCET catalog ({} maps from {dir})</title>\n\
                  </head>\n\
                  <body>",
             catalog.len())?;
    let mut row_ms = RollingAverage::new(8)?;
    for map in &catalog {
        let t0 = Instant::now();
        let colors: Vec<RGB8> = map.range(0., 1., 128).map(|(_, c)| c)
            .collect();
        let comment = format!("{} ({} colors)", map.display_name(), map.len());
        table_of_colors(&mut fh, &colors, 2, &comment)?;
        row_ms.push(t0.elapsed().as_secs_f64() * 1e3);
    }
    writeln!(fh, "<p>Last {} rows rendered in {:.3} ms on average.</p>",
             row_ms.count(), row_ms.average())?;
    writeln!(fh, "</body>\n\
                  </html>")?;
    Ok(())
}
