//! Global CSS styles for the Campaign Guide.
//!
//! Sea-chart palette: ink backgrounds, parchment text, brass accents.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* INK (Backgrounds) */
  --ink: #10151a;
  --ink-lighter: #161d24;
  --ink-border: #26313b;

  /* PARCHMENT (Text) */
  --text-primary: #efe6d2;
  --text-secondary: rgba(239, 230, 210, 0.75);
  --text-muted: rgba(239, 230, 210, 0.5);

  /* BRASS (Titles, Selection) */
  --brass: #c9a24a;
  --brass-glow: rgba(201, 162, 74, 0.3);

  /* SEA (Links, Interaction) */
  --sea: #4fa3a5;
  --sea-glow: rgba(79, 163, 165, 0.3);

  /* SEMANTIC */
  --danger: #d0584f;

  /* TYPOGRAPHY */
  --font-serif: 'Cormorant Garamond', Georgia, serif;
  --font-body: 'Inter', system-ui, sans-serif;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.25rem;
}

* { box-sizing: border-box; }

body {
  margin: 0;
  background: var(--ink);
  color: var(--text-primary);
  font-family: var(--font-body);
  font-size: var(--text-base);
  line-height: 1.55;
}

a, .record-link {
  color: var(--sea);
  text-decoration: none;
}

a:hover, .record-link:hover { text-decoration: underline; }

/* === Shell === */
.app-shell {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
}

.nav-header {
  position: sticky;
  top: 0;
  z-index: 10;
  background: var(--ink-lighter);
  border-bottom: 1px solid var(--ink-border);
  padding: 0.75rem 1.5rem 0.5rem;
}

.nav-header-inner {
  display: flex;
  align-items: center;
  gap: 1rem;
}

.nav-history { display: flex; gap: 0.25rem; }

.app-title {
  flex: 1;
  margin: 0;
  font-family: var(--font-serif);
  font-size: 1.6rem;
  font-weight: 500;
  color: var(--brass);
  cursor: pointer;
}

.page {
  flex: 1;
  padding: 1.5rem;
  max-width: 1100px;
  width: 100%;
  margin: 0 auto;
}

.page-placeholder, .placeholder {
  color: var(--text-muted);
  font-style: italic;
}

/* === Buttons === */
.btn-primary, .btn-badge, .btn-toggle, .btn-ghost {
  background: transparent;
  color: var(--text-primary);
  font-family: var(--font-body);
  cursor: pointer;
  transition: all 0.2s ease;
}

.btn-primary {
  padding: 0.6rem 1.5rem;
  border: 1px solid var(--sea);
  border-radius: 4px;
}

.btn-primary:hover {
  box-shadow: 0 0 16px var(--sea-glow);
  transform: translateY(-1px);
}

.btn-badge {
  padding: 0.1rem 0.5rem;
  border: 1px solid var(--ink-border);
  border-radius: 999px;
  font-size: var(--text-sm);
}

.btn-toggle {
  padding: 0.4rem 1rem;
  border: 1px solid var(--ink-border);
  border-radius: 4px;
}

.btn-toggle.active {
  border-color: var(--danger);
  color: var(--danger);
}

.btn-ghost {
  padding: 0.4rem 0.75rem;
  border: none;
  color: var(--text-secondary);
}

.btn-ghost:hover { color: var(--sea); }

.icon-btn {
  width: 2rem;
  height: 2rem;
  background: transparent;
  border: 1px solid var(--ink-border);
  border-radius: 50%;
  color: var(--text-secondary);
  cursor: pointer;
}

.icon-btn:disabled { opacity: 0.3; cursor: default; }
.icon-btn:not(:disabled):hover { border-color: var(--sea); color: var(--sea); }

/* === Section pills === */
.section-pills {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
  margin-top: 0.75rem;
}

.pill {
  padding: 0.3rem 0.9rem;
  background: transparent;
  border: 1px solid var(--ink-border);
  border-radius: 999px;
  color: var(--text-secondary);
  font-size: var(--text-sm);
  cursor: pointer;
  transition: all 0.2s ease;
}

.pill:hover { border-color: var(--brass); }

.pill.selected {
  background: var(--brass-glow);
  border-color: var(--brass);
  color: var(--text-primary);
}

/* === Search === */
.search-input-wrapper {
  position: relative;
  display: flex;
  flex-direction: column;
  margin: 1rem 0;
}

.search-icon {
  position: absolute;
  left: 0.75rem;
  top: 0.55rem;
  opacity: 0.5;
}

.input-field {
  width: 100%;
  padding: 0.55rem 0.75rem 0.55rem 2.25rem;
  background: transparent;
  border: 1px solid var(--ink-border);
  border-radius: 4px;
  color: var(--sea);
  font-size: var(--text-base);
}

.input-field:focus {
  outline: none;
  border-color: var(--sea);
  box-shadow: 0 0 12px var(--sea-glow);
}

.input-field::placeholder {
  color: var(--text-muted);
  font-style: italic;
}

.input-hint {
  margin-top: 0.35rem;
  color: var(--text-muted);
  font-size: var(--text-sm);
}

/* === Cards === */
.card-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
  gap: 1rem;
}

.record-card {
  padding: 1rem;
  background: var(--ink-lighter);
  border: 1px solid var(--ink-border);
  border-radius: 6px;
  cursor: pointer;
  transition: border-color 0.2s ease;
}

.record-card:hover { border-color: var(--brass); }

.record-card__header {
  display: flex;
  justify-content: space-between;
  align-items: baseline;
  gap: 0.5rem;
}

.record-card__title {
  margin: 0;
  font-family: var(--font-serif);
  font-size: var(--text-lg);
  color: var(--brass);
}

.record-card__subtitle {
  margin: 0.25rem 0 0;
  color: var(--text-secondary);
  font-size: var(--text-sm);
}

.record-card__excerpt {
  margin: 0.5rem 0 0;
  color: var(--text-muted);
  font-size: var(--text-sm);
}

.record-card__peek { margin-top: 0.5rem; padding-left: 0; }

.score {
  min-width: 1.5rem;
  padding: 0 0.4rem;
  border-radius: 999px;
  background: var(--sea-glow);
  color: var(--sea);
  font-size: var(--text-sm);
  text-align: center;
}

/* === Record view (rendered display units) === */
.record-panel { opacity: 0; transition: opacity 0.2s ease; }
.record-panel.ready { opacity: 1; }

.record-page__toolbar {
  display: flex;
  justify-content: space-between;
  margin-bottom: 1rem;
}

.record-view__title {
  margin: 0;
  font-family: var(--font-serif);
  font-size: 2rem;
  color: var(--brass);
}

.record-view__subtitle {
  color: var(--text-secondary);
  text-transform: uppercase;
  letter-spacing: 0.08em;
  font-size: var(--text-sm);
}

.record-view__details dt {
  margin-top: 0.5rem;
  color: var(--text-muted);
  font-size: var(--text-sm);
}

.record-view__details dd { margin: 0; }

.record-view__related h3, .record-view__details h3, .record-view__secrets h3 {
  margin: 1.25rem 0 0.5rem;
  font-family: var(--font-serif);
  color: var(--brass);
}

.record-view__secrets:not(:empty) {
  margin-top: 1.5rem;
  padding: 0.75rem 1rem;
  border-left: 3px solid var(--danger);
  background: rgba(208, 88, 79, 0.08);
}

.npc-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(200px, 1fr));
  gap: 0.75rem;
}

.npc-card {
  padding: 0.5rem 0.75rem;
  border: 1px solid var(--ink-border);
  border-radius: 4px;
}

.npc-card__name { margin: 0; }
.npc-card__meta { margin: 0.2rem 0 0; color: var(--text-muted); font-size: var(--text-sm); }

.npc-list-panel { opacity: 0; transition: opacity 0.2s ease; }
.npc-list-panel.ready { opacity: 1; }

.npc-list__summary { color: var(--text-secondary); font-size: var(--text-sm); }

.npc-list__items {
  list-style: none;
  padding: 0;
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
  gap: 0.75rem;
}

.npc-list__item { display: flex; align-items: flex-start; gap: 0.5rem; }

/* === Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  z-index: 100;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0.7);
}

.modal-dialog {
  width: min(640px, 92vw);
  max-height: 85vh;
  overflow-y: auto;
  padding: 1.25rem 1.5rem;
  background: var(--ink-lighter);
  border: 1px solid var(--ink-border);
  border-radius: 8px;
}

.modal-header {
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.modal-title {
  margin: 0;
  font-family: var(--font-serif);
  color: var(--brass);
}

.modal-actions {
  display: flex;
  justify-content: flex-end;
  margin-top: 1rem;
}

.help-list li { margin: 0.4rem 0; }

/* === Overview === */
.overview-title {
  font-family: var(--font-serif);
  font-size: 2.2rem;
  color: var(--brass);
  margin: 0 0 0.5rem;
}

.overview-summary { color: var(--text-secondary); }

.section-page__header .section-title {
  font-family: var(--font-serif);
  color: var(--brass);
  margin: 0;
}
"#;
