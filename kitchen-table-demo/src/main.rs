//! Terminal demo: the world's largest cities in a sortable table with a
//! frozen name column and a fixed header.
//!
//! Keys: `1`-`9` sort by the n-th sortable column, arrows scroll, `j`/`k`
//! move the row cursor, `Enter` selects the row, `q`/`Esc` quit.

use std::cell::RefCell;
use std::error::Error;
use std::fs::File;
use std::rc::Rc;

use crossterm::event::{Event as CrosstermEvent, KeyEventKind};
use kitchen_table::classes;
use kitchen_table::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};
use tabledom::{render_table, Buffer, Cell, Key, Rgb, TableExtent, Terminal, TextStyle, Viewport};

const SCROLL_STEP_X: i32 = 4;
const SCROLL_STEP_Y: i32 = 1;

fn columns() -> Vec<Column> {
    vec![
        Column::new("City", "city").freeze(),
        Column::new("Country", "country"),
        Column::group(
            "Population",
            vec![
                Column::new("City proper", "cityProper")
                    .renderer(|value, _| group_digits(value).into()),
                Column::new("Metropolitan", "metro")
                    .renderer(|value, _| group_digits(value).into())
                    .default_value("N/A"),
                Column::computed("Density", |row| {
                    match (row.get("cityProper").as_f64(), row.get("area").as_f64()) {
                        (Some(people), Some(area)) if area > 0.0 => {
                            Value::from((people / area).round())
                        }
                        _ => Value::Null,
                    }
                })
                .default_with(|| Element::span().class_name("unknown").content("?").into())
                .style(|value, _| {
                    let dense = value.as_f64().is_some_and(|d| d > 10_000.0);
                    if dense {
                        Style::new().foreground(Color::rgb(255, 120, 120))
                    } else {
                        Style::new()
                    }
                }),
            ],
        ),
        Column::new("Area (km²)", "area").class_with(|value, _| {
            value.is_null().then(|| "missing".to_string())
        }),
    ]
}

fn cities() -> Vec<Row> {
    vec![
        row! { "city" => "Shanghai", "country" => "China", "cityProper" => 24256800, "metro" => 34750000, "area" => 6340.5 },
        row! { "city" => "Karachi", "country" => "Pakistan", "cityProper" => 23500000, "metro" => 25400000, "area" => 3527.0 },
        row! { "city" => "Beijing", "country" => "China", "cityProper" => 21516000, "metro" => 24900000, "area" => 16410.5 },
        row! { "city" => "Dhaka", "country" => "Bangladesh", "cityProper" => 16970105, "metro" => 15669000, "area" => 338.0 },
        row! { "city" => "Delhi", "country" => "India", "cityProper" => 16787941, "metro" => 24998000, "area" => 1484.0 },
        row! { "city" => "Lagos", "country" => "Nigeria", "cityProper" => 16060303, "metro" => 13123000, "area" => 1171.3 },
        row! { "city" => "Istanbul", "country" => "Turkey", "cityProper" => 14025000, "metro" => Value::Null, "area" => 5461.0 },
        row! { "city" => "Tokyo", "country" => "Japan", "cityProper" => 13513734, "metro" => 37843000, "area" => 2188.0 },
        row! { "city" => "Guangzhou", "country" => "China", "cityProper" => 13080500, "metro" => 44259000, "area" => 3843.4 },
        row! { "city" => "Mumbai", "country" => "India", "cityProper" => 12442373, "metro" => 17712000, "area" => 603.4 },
        row! { "city" => "Moscow", "country" => "Russia", "cityProper" => 12380664, "metro" => 16170000, "area" => 2511.0 },
        row! { "city" => "São Paulo", "country" => "Brazil", "cityProper" => 12038175, "metro" => 20935000, "area" => 1521.1 },
        row! { "city" => "Shenzhen", "country" => "China", "cityProper" => 10467400, "metro" => 12084000, "area" => 1991.6 },
        row! { "city" => "Jakarta", "country" => "Indonesia", "cityProper" => 10075310, "metro" => 30539000, "area" => 664.0 },
        row! { "city" => "Seoul", "country" => "South Korea", "cityProper" => 9995784, "metro" => 25514000, "area" => Value::Null },
    ]
}

fn group_digits(value: &Value) -> String {
    let Some(n) = value.as_f64() else {
        return value.to_string();
    };
    let digits = format!("{}", n.round() as i64);
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Status line shared with the table callbacks.
#[derive(Default)]
struct Status {
    hovered: Option<String>,
    selected: Option<String>,
    sort: Option<String>,
}

impl Status {
    fn line(&self) -> String {
        let part = |label: &str, v: &Option<String>| format!("{label}: {}", v.as_deref().unwrap_or("-"));
        [
            part("row", &self.hovered),
            part("selected", &self.selected),
            part("sort", &self.sort),
            "1-9 sort, arrows scroll, j/k move, enter select, q quit".to_string(),
        ]
        .join("  |  ")
    }
}

fn props(status: &Rc<RefCell<Status>>) -> TableProps {
    let on_sort = status.clone();
    let on_enter = status.clone();
    let on_leave = status.clone();
    let on_click = status.clone();

    let row_props = RowProps::new()
        .class_name(|row| (row.get("country") == Value::from("China")).then(|| "highlighted".to_string()))
        .on_mouse_enter(move |row, idx, _| {
            on_enter.borrow_mut().hovered = Some(format!("{} (#{idx})", row.get("city")));
        })
        .on_mouse_leave(move |_, _, _| {
            on_leave.borrow_mut().hovered = None;
        })
        .on_click(move |row, idx, event| {
            log::info!("[demo] {} on row {idx}", event.kind());
            on_click.borrow_mut().selected = Some(row.get("city").to_string());
        });

    TableProps::new()
        .id("cities")
        .sortable(true)
        .fixed_header(true)
        .on_sort_end(move |column, order| {
            on_sort.borrow_mut().sort = order.map(|o| format!("{} {o}", column.title.label()));
        })
        .row_props(row_props)
}

/// Ids of the sortable header cells, left to right.
fn sortable_headers(table: &KitchenTable) -> Vec<String> {
    table
        .element()
        .map(|root| {
            root.find_by_class(classes::SORTABLE)
                .into_iter()
                .filter(|el| el.tag == Tag::Th)
                .map(|el| el.id.clone())
                .collect()
        })
        .unwrap_or_default()
}

fn row_id(table: &KitchenTable, position: usize) -> Option<String> {
    let root = table.element()?;
    let position = position.to_string();
    root.find_all(Tag::Tr)
        .into_iter()
        .find(|tr| tr.data.get("row-index") == Some(&position))
        .map(|tr| tr.id.clone())
}

struct Demo {
    table: KitchenTable,
    container: ScrollContainer,
    status: Rc<RefCell<Status>>,
    cursor: Option<usize>,
    extent: TableExtent,
    viewport: (u16, u16),
}

impl Demo {
    fn scroll(&mut self, dx: i32, dy: i32) -> Result<(), TableError> {
        let max_x = self.extent.width.saturating_sub(self.viewport.0) as i32;
        let max_y = self.extent.height.saturating_sub(self.viewport.1) as i32;
        let offset = self.container.offset();
        let x = (offset.x as i32 + dx).clamp(0, max_x) as u16;
        let y = (offset.y as i32 + dy).clamp(0, max_y) as u16;
        if (x, y) == (offset.x, offset.y) {
            return Ok(());
        }
        if let Some(event) = self.container.scroll_to(x, y) {
            self.table.dispatch(&event)?;
        }
        Ok(())
    }

    fn sort_by(&mut self, n: usize) -> Result<(), TableError> {
        let Some(id) = sortable_headers(&self.table).into_iter().nth(n) else {
            return Ok(());
        };
        self.table.dispatch(&Event::click(id))?;
        Ok(())
    }

    fn move_cursor(&mut self, delta: isize) -> Result<(), TableError> {
        let rows = self.table.rows().len();
        if rows == 0 {
            return Ok(());
        }
        let next = match self.cursor {
            Some(c) => c.saturating_add_signed(delta).min(rows - 1),
            None => 0,
        };
        if let Some(id) = self.cursor.and_then(|c| row_id(&self.table, c)) {
            self.table.dispatch(&Event::mouse_leave(id))?;
        }
        if let Some(id) = row_id(&self.table, next) {
            self.table.dispatch(&Event::mouse_enter(id))?;
        }
        self.cursor = Some(next);
        Ok(())
    }

    fn select(&mut self) -> Result<(), TableError> {
        if let Some(id) = self.cursor.and_then(|c| row_id(&self.table, c)) {
            self.table.dispatch(&Event::click(id))?;
        }
        Ok(())
    }

    fn paint(&self, buf: &mut Buffer) -> TableExtent {
        let (width, height) = (buf.width(), buf.height());
        let extent = match self.table.element() {
            Some(root) => render_table(
                root,
                buf,
                Viewport {
                    width,
                    height: height.saturating_sub(1),
                    scroll: self.container.offset(),
                },
            ),
            None => TableExtent::default(),
        };

        if let Some(cursor) = self.cursor {
            // Header rows sit above the body.
            let header_rows = (extent.height as usize).saturating_sub(self.table.rows().len());
            let y = (header_rows + cursor) as i32 - self.container.scroll_top() as i32;
            if y >= header_rows as i32 && y < height.saturating_sub(1) as i32 {
                let marker = Cell::pen(Rgb::new(255, 200, 0), Rgb::default(), TextStyle::new());
                buf.set_string(0, y as u16, ">", 1, marker);
            }
        }

        if height > 0 {
            let pen = Cell::pen(
                Rgb::new(200, 200, 200),
                Rgb::new(30, 30, 60),
                TextStyle::new().dim(),
            );
            buf.fill(0, height - 1, width, pen.bg);
            buf.set_string(0, height - 1, &self.status.borrow().line(), width as i32, pen);
        }

        extent
    }
}

fn run(term: &mut Terminal, demo: &mut Demo) -> Result<(), Box<dyn Error>> {
    loop {
        let extent = term.draw(|buf| demo.paint(buf))?;
        let (width, height) = term.size();
        demo.extent = extent;
        demo.viewport = (width, height.saturating_sub(1));

        for raw in term.poll(None)? {
            let CrosstermEvent::Key(key) = raw else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match Key::from(key.code) {
                Key::Char('q') | Key::Escape => return Ok(()),
                Key::Char(c @ '1'..='9') => demo.sort_by(c as usize - '1' as usize)?,
                Key::Char('j') => demo.move_cursor(1)?,
                Key::Char('k') => demo.move_cursor(-1)?,
                Key::Enter => demo.select()?,
                Key::Left => demo.scroll(-SCROLL_STEP_X, 0)?,
                Key::Right => demo.scroll(SCROLL_STEP_X, 0)?,
                Key::Up => demo.scroll(0, -SCROLL_STEP_Y)?,
                Key::Down => demo.scroll(0, SCROLL_STEP_Y)?,
                Key::PageUp => demo.scroll(0, -(demo.viewport.1 as i32))?,
                Key::PageDown => demo.scroll(0, demo.viewport.1 as i32)?,
                _ => {}
            }
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let log_file = File::create("kitchen-table-demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    let status = Rc::new(RefCell::new(Status::default()));
    let mut table = KitchenTable::new(props(&status), columns(), cities());
    let mut container = ScrollContainer::new("cities-scroll");
    table.render()?;
    table.mount(&mut container)?;

    let mut demo = Demo {
        table,
        container,
        status,
        cursor: None,
        extent: TableExtent::default(),
        viewport: (0, 0),
    };

    let mut term = Terminal::new()?;
    let result = run(&mut term, &mut demo);
    drop(term);

    demo.table.unmount(&mut demo.container)?;
    log::info!("[demo] exiting");
    result
}
