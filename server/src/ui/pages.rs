//! HTML page generation
//!
//! Server-rendered pages. Everything that varies with the logged-in owner
//! takes a `SessionSnapshot`; the pages never read the session themselves.

use crate::pricing::PricingEntry;
use crate::room::{Room, RoomListItem, RoomSummary};
use crate::session::SessionSnapshot;

/// Escape text for use in element content and quoted attributes
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Header bar: owner badge with logout button, or the login form
fn owner_bar(session: &SessionSnapshot) -> String {
    match (&session.owner_name, session.is_authenticated) {
        (Some(name), true) => format!(
            r#"<div class="owner" data-authenticated="true">
            <span class="owner-name">{name}</span>
            <span class="owner-role">{role}</span>
            <form method="post" action="/logout"><button type="submit">Log out</button></form>
        </div>"#,
            name = escape_html(name),
            role = escape_html(session.owner_role.as_deref().unwrap_or_default()),
        ),
        _ => r#"<div class="owner" data-authenticated="false">
            <form method="post" action="/login" class="login-form">
                <input name="name" placeholder="Owner name" required>
                <input name="role" placeholder="Role (owner)">
                <button type="submit">Log in</button>
            </form>
        </div>"#
            .to_string(),
    }
}

fn layout(title: &str, api_base_url: &str, session: &SessionSnapshot, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} | RoomDesk</title>
    <style>
{css}
    </style>
</head>
<body data-api-base="{api}">
    <header>
        <h1><a href="/">RoomDesk</a></h1>
        <nav><a href="/">Rooms</a> <a href="/pricing">Pricing</a></nav>
        {owner}
    </header>
    <main>
{body}
    </main>
</body>
</html>"#,
        title = escape_html(title),
        css = CSS,
        api = escape_html(api_base_url),
        owner = owner_bar(session),
        body = body,
    )
}

/// Room listing page
pub fn rooms_page(
    session: &SessionSnapshot,
    api_base_url: &str,
    rooms: Result<&[RoomListItem], &str>,
    summary: &RoomSummary,
) -> String {
    let mut body = String::new();

    if let (Some(name), true) = (&session.owner_name, session.is_authenticated) {
        body.push_str(&format!(
            r#"<p class="welcome">Welcome back, {}.</p>"#,
            escape_html(name)
        ));
    }

    body.push_str(&format!(
        r#"<section class="summary">
            <span>{total} rooms</span>
            <span class="status-available">{available} available</span>
            <span class="status-occupied">{occupied} occupied</span>
            <span class="status-maintenance">{maintenance} under maintenance</span>
        </section>"#,
        total = summary.total,
        available = summary.available,
        occupied = summary.occupied,
        maintenance = summary.maintenance,
    ));

    match rooms {
        Err(message) => body.push_str(&format!(
            r#"<p class="error">Rooms are unavailable: {}</p>"#,
            escape_html(message)
        )),
        Ok([]) => body.push_str(r#"<p class="empty">No rooms listed yet.</p>"#),
        Ok(rooms) => {
            body.push_str(r#"<section class="rooms">"#);
            for room in rooms {
                let thumbnail = room
                    .thumbnail
                    .as_deref()
                    .map(|src| format!(r#"<img src="{}" alt="">"#, escape_html(src)))
                    .unwrap_or_default();
                body.push_str(&format!(
                    r#"<article class="room status-{status}">
                {thumbnail}
                <h2><a href="/rooms/{id}">{code} · {title}</a></h2>
                <p>{floor} · {area} m² · up to {capacity}</p>
                <p class="price">{price} / month</p>
                <span class="badge">{label}</span>
            </article>"#,
                    status = room.status.as_str(),
                    thumbnail = thumbnail,
                    id = room.id,
                    code = escape_html(&room.code),
                    title = escape_html(&room.title),
                    floor = escape_html(&room.floor),
                    area = room.area,
                    capacity = room.capacity,
                    price = room.price,
                    label = room.status.label(),
                ));
            }
            body.push_str("</section>");
        }
    }

    layout("Rooms", api_base_url, session, &body)
}

/// Single room page
pub fn room_page(session: &SessionSnapshot, api_base_url: &str, room: &Room) -> String {
    let amenities: String = room
        .amenities
        .iter()
        .map(|a| format!("<li>{}</li>", escape_html(a)))
        .collect();
    let images: String = room
        .images
        .iter()
        .map(|src| format!(r#"<img src="{}" alt="">"#, escape_html(src)))
        .collect();

    let body = format!(
        r#"<article class="room-detail status-{status}">
            <h2>{code} · {title}</h2>
            <div class="gallery">{images}</div>
            <dl>
                <dt>Floor</dt><dd>{floor}</dd>
                <dt>Status</dt><dd>{label}</dd>
                <dt>Area</dt><dd>{area} m²</dd>
                <dt>Capacity</dt><dd>{capacity}</dd>
                <dt>Rent</dt><dd>{price} / month</dd>
                <dt>Updated</dt><dd>{updated}</dd>
            </dl>
            <h3>Amenities</h3>
            <ul class="amenities">{amenities}</ul>
        </article>"#,
        status = room.status.as_str(),
        code = escape_html(&room.code),
        title = escape_html(&room.title),
        images = images,
        floor = escape_html(&room.floor),
        label = room.status.label(),
        area = room.area,
        capacity = room.capacity,
        price = room.price,
        updated = room.updated_at.format("%Y-%m-%d"),
        amenities = amenities,
    );

    layout(&room.title, api_base_url, session, &body)
}

/// Page shown when a room lookup fails
pub fn room_not_found_page(session: &SessionSnapshot, api_base_url: &str, id: &str) -> String {
    let body = format!(
        r#"<p class="error">No room matches <code>{}</code>.</p><p><a href="/">Back to rooms</a></p>"#,
        escape_html(id)
    );
    layout("Room not found", api_base_url, session, &body)
}

/// Room type pricing page
pub fn pricing_page(session: &SessionSnapshot, api_base_url: &str, entries: &[PricingEntry]) -> String {
    let rows: String = entries
        .iter()
        .map(|e| {
            format!(
                r#"<tr id="{code}">
                    <td>{name}</td>
                    <td>{area} m²</td>
                    <td>{capacity}</td>
                    <td>{price}</td>
                    <td>{description}</td>
                </tr>"#,
                code = e.code,
                name = e.name,
                area = e.area_m2,
                capacity = e.capacity,
                price = e.monthly_price,
                description = e.description,
            )
        })
        .collect();

    let body = format!(
        r#"<table class="pricing">
            <thead>
                <tr><th>Room type</th><th>Area</th><th>Capacity</th><th>Monthly rent</th><th>Description</th></tr>
            </thead>
            <tbody>
{rows}
            </tbody>
        </table>"#
    );

    layout("Pricing", api_base_url, session, &body)
}

const CSS: &str = r#"
* { box-sizing: border-box; }
body { font-family: system-ui, -apple-system, sans-serif; margin: 0; background: #f6f7f9; color: #222; }
header { display: flex; align-items: center; gap: 24px; padding: 12px 24px; background: #1f3a5f; color: #fff; }
header h1 { font-size: 1.3em; margin: 0; }
header a { color: #fff; text-decoration: none; margin-right: 12px; }
.owner { margin-left: auto; display: flex; gap: 8px; align-items: center; }
.owner form { display: inline; }
.owner-role { font-size: 0.8em; background: #2f5d8f; padding: 2px 8px; border-radius: 8px; }
main { max-width: 1100px; margin: 0 auto; padding: 24px; }
.summary { display: flex; gap: 16px; margin-bottom: 16px; }
.rooms { display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 16px; }
.room { background: #fff; border-radius: 8px; padding: 16px; box-shadow: 0 1px 3px rgba(0,0,0,0.1); }
.room img { width: 100%; border-radius: 4px; }
.room h2 { font-size: 1.05em; }
.room h2 a { color: #1f3a5f; }
.price { font-weight: bold; }
.badge { font-size: 0.8em; padding: 2px 8px; border-radius: 8px; background: #ddd; }
.status-available .badge { background: #c8f0d2; }
.status-occupied .badge { background: #f5d0d0; }
.status-maintenance .badge { background: #f5e6c0; }
.error { color: #a33; }
.pricing { width: 100%; border-collapse: collapse; background: #fff; }
.pricing th, .pricing td { padding: 10px; border-bottom: 1px solid #eee; text-align: left; }
"#;
