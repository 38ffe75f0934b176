use std::collections::HashMap;

use once_cell::sync::Lazy;

const BODY_ROWS: usize = 7;
const ACCENT_ROWS: usize = 3;
const COLUMNS: usize = 5;
const CELL_WIDTH: usize = 2;
const GAP: usize = 2;
const SHADOW_OFFSET: usize = 1;
const FILL_CHAR: char = '█';
const SHADOW_CHAR: char = '░';
const FALLBACK: char = '?';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Accent {
    None,
    Ring,
    Dots,
}

impl Accent {
    fn rows(self) -> [&'static str; ACCENT_ROWS] {
        match self {
            Accent::None => ["     "; ACCENT_ROWS],
            Accent::Ring => ["  #  ", " # # ", "  #  "],
            Accent::Dots => ["     ", " # # ", "     "],
        }
    }
}

struct Glyph {
    accent: Accent,
    /// Seven rows of five cells, separated by `|`.
    body: &'static str,
}

const fn plain(body: &'static str) -> Glyph {
    Glyph {
        accent: Accent::None,
        body,
    }
}

const LETTER_A: &str = " ### |#   #|#   #|#####|#   #|#   #|#   #";
const LETTER_O: &str = " ### |#   #|#   #|#   #|#   #|#   #| ### ";

static GLYPHS: Lazy<HashMap<char, Glyph>> = Lazy::new(|| {
    HashMap::from([
        ('A', plain(LETTER_A)),
        ('B', plain("#### |#   #|#   #|#### |#   #|#   #|#### ")),
        ('C', plain(" ####|#    |#    |#    |#    |#    | ####")),
        ('D', plain("#### |#   #|#   #|#   #|#   #|#   #|#### ")),
        ('E', plain("#####|#    |#    |#### |#    |#    |#####")),
        ('F', plain("#####|#    |#    |#### |#    |#    |#    ")),
        ('G', plain(" ####|#    |#    |#  ##|#   #|#   #| ### ")),
        ('H', plain("#   #|#   #|#   #|#####|#   #|#   #|#   #")),
        ('I', plain(" ### |  #  |  #  |  #  |  #  |  #  | ### ")),
        ('J', plain("  ###|   # |   # |   # |   # |#  # | ##  ")),
        ('K', plain("#   #|#  # |# #  |##   |# #  |#  # |#   #")),
        ('L', plain("#    |#    |#    |#    |#    |#    |#####")),
        ('M', plain("#   #|## ##|# # #|# # #|#   #|#   #|#   #")),
        ('N', plain("#   #|##  #|# # #|#  ##|#   #|#   #|#   #")),
        ('O', plain(LETTER_O)),
        ('P', plain("#### |#   #|#   #|#### |#    |#    |#    ")),
        ('Q', plain(" ### |#   #|#   #|#   #|# # #|#  # | ## #")),
        ('R', plain("#### |#   #|#   #|#### |# #  |#  # |#   #")),
        ('S', plain(" ####|#    |#    | ### |    #|    #|#### ")),
        ('T', plain("#####|  #  |  #  |  #  |  #  |  #  |  #  ")),
        ('U', plain("#   #|#   #|#   #|#   #|#   #|#   #| ### ")),
        ('V', plain("#   #|#   #|#   #|#   #|#   #| # # |  #  ")),
        ('W', plain("#   #|#   #|#   #|# # #|# # #|## ##|#   #")),
        ('X', plain("#   #|#   #| # # |  #  | # # |#   #|#   #")),
        ('Y', plain("#   #|#   #| # # |  #  |  #  |  #  |  #  ")),
        ('Z', plain("#####|    #|   # |  #  | #   |#    |#####")),
        (
            'Å',
            Glyph {
                accent: Accent::Ring,
                body: LETTER_A,
            },
        ),
        (
            'Ä',
            Glyph {
                accent: Accent::Dots,
                body: LETTER_A,
            },
        ),
        (
            'Ö',
            Glyph {
                accent: Accent::Dots,
                body: LETTER_O,
            },
        ),
        ('0', plain(" ### |#   #|#  ##|# # #|##  #|#   #| ### ")),
        ('1', plain("  #  | ##  |  #  |  #  |  #  |  #  | ### ")),
        ('2', plain(" ### |#   #|    #|   # |  #  | #   |#####")),
        ('3', plain("#### |    #|    #| ### |    #|    #|#### ")),
        ('4', plain("   # |  ## | # # |#  # |#####|   # |   # ")),
        ('5', plain("#####|#    |#### |    #|    #|#   #| ### ")),
        ('6', plain(" ### |#    |#    |#### |#   #|#   #| ### ")),
        ('7', plain("#####|    #|   # |  #  |  #  |  #  |  #  ")),
        ('8', plain(" ### |#   #|#   #| ### |#   #|#   #| ### ")),
        ('9', plain(" ### |#   #|#   #| ####|    #|    #| ### ")),
        ('%', plain("##  #|## # |   # |  #  | #   |# ## |#  ##")),
        (' ', plain("     |     |     |     |     |     |     ")),
        (FALLBACK, plain(" ### |#   #|    #|   # |  #  |     |  #  ")),
    ])
});

fn lookup(ch: char) -> Option<&'static Glyph> {
    GLYPHS.get(&ch).or_else(|| GLYPHS.get(&FALLBACK))
}

/// Render `text` in the block font, uppercased, with a drop shadow.
///
/// Three accent rows are reserved on top only when the text contains `Å`,
/// `Ä` or `Ö`.
pub fn render(text: &str) -> Vec<String> {
    let glyphs: Vec<&Glyph> = text
        .chars()
        .flat_map(char::to_uppercase)
        .filter_map(lookup)
        .collect();

    let accented = glyphs.iter().any(|glyph| glyph.accent != Accent::None);
    let top = if accented { ACCENT_ROWS } else { 0 };
    let height = top + BODY_ROWS + SHADOW_OFFSET;
    if glyphs.is_empty() {
        return vec![String::new(); height];
    }

    let advance = COLUMNS * CELL_WIDTH + GAP;
    let width = glyphs.len() * advance - GAP + SHADOW_OFFSET * CELL_WIDTH;
    let mut canvas = vec![vec![' '; width]; height];

    for (index, glyph) in glyphs.iter().enumerate() {
        let x = index * advance;
        if accented {
            stamp(&mut canvas, glyph.accent.rows().iter().copied(), 0, x);
        }
        stamp(&mut canvas, glyph.body.split('|'), top, x);
    }

    canvas
        .into_iter()
        .map(|row| row.into_iter().collect::<String>().trim_end().to_string())
        .collect()
}

fn stamp<'a>(canvas: &mut [Vec<char>], rows: impl Iterator<Item = &'a str>, y: usize, x: usize) {
    for (dy, row) in rows.enumerate() {
        for (col, cell) in row.chars().enumerate() {
            if cell != '#' {
                continue;
            }
            let cx = x + col * CELL_WIDTH;
            for dx in 0..CELL_WIDTH {
                put(canvas, y + dy + SHADOW_OFFSET, cx + dx + CELL_WIDTH, SHADOW_CHAR);
                put(canvas, y + dy, cx + dx, FILL_CHAR);
            }
        }
    }
}

fn put(canvas: &mut [Vec<char>], y: usize, x: usize, ch: char) {
    let Some(cell) = canvas.get_mut(y).and_then(|row| row.get_mut(x)) else {
        return;
    };
    if ch == FILL_CHAR || *cell == ' ' {
        *cell = ch;
    }
}
