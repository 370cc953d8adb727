use bookshelf::surface::page::Page;
use bookshelf::surface::{ids, Paragraph, ParagraphClass, TableRow};
use colored::Colorize;
use unicode_width::UnicodeWidthStr;

const HEADERS: [&str; 4] = ["Title", "Stock", "Price", "Price in $"];
const COLUMN_GAP: &str = "  ";

/// Prints the parts of the page a terminal user cares about, top to bottom:
/// status, message, field errors, table, statistics.
pub(super) fn print_page(page: &Page) {
    print_paragraphs(page.paragraphs(ids::STATUS));

    let message = page.text(ids::MESSAGE);
    if !message.is_empty() {
        println!("{}", message);
    }

    for (label, text) in page.error_labels() {
        let field = label.strip_suffix("-error").unwrap_or(label);
        println!("{} {}", format!("{}:", field).red().bold(), text.red());
    }

    let rows = page.rows(ids::BOOKS_TABLE_BODY);
    if page.is_visible(ids::BOOKS_TABLE) && !rows.is_empty() {
        let mut lines = table_lines(rows).into_iter();
        if let Some(header) = lines.next() {
            println!("{}", header.bold());
        }
        for line in lines {
            println!("{}", line);
        }
    }

    let stats = page.paragraphs(ids::STATS);
    if !stats.is_empty() {
        println!();
        print_paragraphs(stats);
    }
}

fn print_paragraphs(paragraphs: &[Paragraph]) {
    for paragraph in paragraphs {
        match paragraph.class {
            ParagraphClass::Plain => println!("{}", paragraph.text.dimmed()),
            ParagraphClass::Success => println!("{}", paragraph.text.green()),
            ParagraphClass::Error => println!("{}", paragraph.text.red()),
        }
    }
}

/// Header plus one line per row. The title column is left-aligned, the
/// numeric ones right-aligned, all measured in display width.
fn table_lines(rows: &[TableRow]) -> Vec<String> {
    let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.width()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(&row.cells) {
            *width = (*width).max(cell.width());
        }
    }

    let header: Vec<String> = HEADERS.iter().map(|h| h.to_string()).collect();
    std::iter::once(&header)
        .chain(rows.iter().map(|row| &row.cells))
        .map(|cells| format_line(cells, &widths))
        .collect()
}

fn format_line(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(column, (cell, width))| {
            let padding = " ".repeat(width.saturating_sub(cell.width()));
            if column == 0 {
                format!("{}{}", cell, padding)
            } else {
                format!("{}{}", padding, cell)
            }
        })
        .collect();
    padded.join(COLUMN_GAP).trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> TableRow {
        TableRow {
            cells: cells.iter().map(|c| c.to_string()).collect(),
            delete_title: cells[0].to_string(),
        }
    }

    #[test]
    fn columns_align_on_the_widest_cell() {
        let lines = table_lines(&[
            row(&["Dune", "2", "15", "15.90"]),
            row(&["Don Quichotte", "3", "20.7", "21.94"]),
        ]);

        assert_eq!(
            lines,
            vec![
                "Title          Stock  Price  Price in $",
                "Dune               2     15       15.90",
                "Don Quichotte      3   20.7       21.94",
            ]
        );
    }

    #[test]
    fn wide_characters_count_by_display_width() {
        let lines = table_lines(&[row(&["三体", "1", "9", "9.54"]), row(&["Emma", "1", "9", "9.54"])]);

        assert_eq!(lines[1].find('1'), lines[2].find('1').map(|i| i + 2));
        assert_eq!(lines[1].width(), lines[2].width());
    }
}
