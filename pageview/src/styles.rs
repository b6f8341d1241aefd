//! CSS for the rendered page.
//!
//! The stylesheet is inlined into the document head so the rendered HTML is
//! self-contained. To extend it:
//!
//! ```rust
//! use pageview_leptos::styles::PAGE_CSS;
//!
//! let my_css = ".card { border-radius: 0; }";
//! let combined = format!("{}\n{}", PAGE_CSS, my_css);
//! ```

/// Complete page stylesheet - light editorial theme with decorative orbs.
pub const PAGE_CSS: &str = r#"
:root {
    --ink: #0f172a;
    --ink-soft: #475569;
    --paper: #f8fafc;
    --card: #ffffff;
    --line: #e2e8f0;
    --accent: #2563eb;
    --accent-soft: #dbeafe;
    --danger: #b91c1c;
    --radius: 18px;
    font-family: "Inter", "Segoe UI", system-ui, sans-serif;
    color: var(--ink);
    background: var(--paper);
}

* { box-sizing: border-box; }
body { margin: 0; }

.status {
    min-height: 100vh;
    display: grid;
    place-items: center;
    font-size: 1.1rem;
    color: var(--ink-soft);
}
.status.error { color: var(--danger); }

.page {
    position: relative;
    overflow: hidden;
    max-width: 1180px;
    margin: 0 auto;
    padding: 24px 32px 48px;
}

.bg-orb {
    position: absolute;
    z-index: -1;
    border-radius: 50%;
    filter: blur(60px);
    opacity: 0.45;
}
.orb-one { width: 420px; height: 420px; top: -140px; right: -120px; background: #93c5fd; }
.orb-two { width: 360px; height: 360px; bottom: 10%; left: -160px; background: #c4b5fd; }

.topbar {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 12px 0 32px;
}
.brand { font-weight: 800; font-size: 1.35rem; letter-spacing: -0.02em; }
.topbar nav { display: flex; gap: 24px; }
.topbar nav a { color: var(--ink-soft); text-decoration: none; font-weight: 500; }
.topbar nav a:hover { color: var(--accent); }

.hero {
    display: grid;
    grid-template-columns: 1.2fr 1fr;
    gap: 40px;
    align-items: center;
    padding: 32px 0 56px;
}
.eyebrow {
    text-transform: uppercase;
    letter-spacing: 0.14em;
    font-size: 0.78rem;
    font-weight: 700;
    color: var(--accent);
}
.hero h1 { font-size: clamp(2.2rem, 4vw, 3.4rem); line-height: 1.08; margin: 12px 0; }
.hero-copy p { color: var(--ink-soft); font-size: 1.1rem; max-width: 56ch; }
.actions { display: flex; gap: 12px; margin-top: 24px; }
.actions button {
    border: 0;
    border-radius: 999px;
    padding: 12px 22px;
    font-weight: 600;
    background: var(--accent);
    color: #fff;
    cursor: pointer;
}
.actions button.secondary { background: var(--accent-soft); color: var(--accent); }

.hero-graphic { position: relative; height: 320px; }
.ring { position: absolute; border-radius: 50%; border: 2px dashed var(--line); }
.ring-a { inset: 10px 40px; }
.ring-b { inset: 60px 90px; border-color: var(--accent-soft); }
.floating-card {
    position: absolute;
    right: 24px;
    bottom: 24px;
    width: 220px;
    padding: 18px;
    border-radius: var(--radius);
    background: var(--card);
    box-shadow: 0 18px 40px rgba(15, 23, 42, 0.12);
}
.floating-card h4 { margin: 0 0 12px; }
.bars { display: flex; align-items: flex-end; gap: 8px; height: 60px; }
.bars span { flex: 1; border-radius: 6px; background: var(--accent); }
.bars span:nth-child(1) { height: 45%; }
.bars span:nth-child(2) { height: 70%; }
.bars span:nth-child(3) { height: 55%; }
.bars span:nth-child(4) { height: 90%; }

section { padding: 28px 0; }
section h2 { font-size: 1.8rem; margin: 0 0 20px; }

.grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
    gap: 18px;
}
.card {
    padding: 22px;
    border-radius: var(--radius);
    background: var(--card);
    border: 1px solid var(--line);
}
.card h3 { margin: 0 0 8px; }
.card p { margin: 0; color: var(--ink-soft); }

.mini-line {
    margin-top: 14px;
    height: 6px;
    border-radius: 999px;
    background: var(--line);
    overflow: hidden;
}
.mini-line span { display: block; height: 100%; background: var(--accent); }

.service-icon {
    width: 40px;
    height: 40px;
    margin-bottom: 14px;
    border-radius: 12px;
    background: var(--accent-soft);
}
.service-icon.stack { background: linear-gradient(135deg, #bfdbfe, #2563eb); }
.service-icon.signal { background: linear-gradient(135deg, #bbf7d0, #16a34a); }
.service-icon.route { background: linear-gradient(135deg, #fde68a, #d97706); }
.service-icon.shield { background: linear-gradient(135deg, #ddd6fe, #7c3aed); }

.chips { display: flex; flex-wrap: wrap; gap: 10px; }
.chip {
    padding: 8px 16px;
    border-radius: 999px;
    background: var(--card);
    border: 1px solid var(--line);
    font-weight: 500;
}

.insights { margin: 0; padding-left: 20px; }
.insights li { padding: 6px 0; color: var(--ink-soft); }

footer {
    border-top: 1px solid var(--line);
    margin-top: 32px;
    padding-top: 20px;
    font-size: 0.9rem;
    color: var(--ink-soft);
}

@media (max-width: 820px) {
    .hero { grid-template-columns: 1fr; }
    .hero-graphic { display: none; }
    .topbar nav { display: none; }
}
"#;
