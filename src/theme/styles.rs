//! Global CSS styles for Wishcard.
//!
//! Gold-on-ivory card aesthetic.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* BACKDROP */
  --plum-deep: #1e1226;
  --plum: #2d1b36;

  /* GOLD (Titles, Primary Actions, Digits) */
  --gold: #c49a6e;
  --gold-bright: #e3b87f;
  --gold-glow: rgba(196, 154, 110, 0.35);

  /* SURFACES */
  --ivory: #fffaf0;
  --ivory-border: rgba(196, 154, 110, 0.4);

  /* TEXT */
  --text-ink: #3b2a1a;
  --text-soft: rgba(59, 42, 26, 0.7);
  --text-light: #f8f1e7;

  /* SEMANTIC */
  --share: #38a169;
  --share-dark: #2f855a;
  --danger: #c53030;

  /* Typography */
  --font-serif: 'Playfair Display', Georgia, serif;
  --font-sans: 'Inter', 'Helvetica Neue', Arial, sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: radial-gradient(ellipse at top, var(--plum) 0%, var(--plum-deep) 70%);
  color: var(--text-ink);
  line-height: 1.6;
  min-height: 100vh;
  overflow-x: hidden;
}

/* === Particle Canvas === */
.particle-canvas {
  position: fixed;
  inset: 0;
  width: 100vw;
  height: 100vh;
  pointer-events: none;
  z-index: 0;
}

/* === Loading === */
.loading-view {
  display: flex;
  align-items: center;
  justify-content: center;
  min-height: 100vh;
}

.loading-text {
  font-family: var(--font-serif);
  font-size: 1.5rem;
  color: var(--gold);
  letter-spacing: 0.08em;
}

/* === Card Panel === */
.card-shell {
  position: relative;
  z-index: 1;
  display: flex;
  justify-content: center;
  padding: 3rem 1rem;
  min-height: 100vh;
}

.card-panel {
  width: 100%;
  max-width: 34rem;
  background: var(--ivory);
  border: 1px solid var(--ivory-border);
  border-radius: 1.25rem;
  padding: 2.5rem 2rem;
  box-shadow: 0 20px 60px rgba(0, 0, 0, 0.45), 0 0 40px var(--gold-glow);
  align-self: flex-start;
}

.card-title {
  font-family: var(--font-serif);
  font-size: 2rem;
  font-weight: 700;
  color: var(--gold);
  text-align: center;
  letter-spacing: 0.04em;
}

.card-subtitle {
  text-align: center;
  color: var(--text-soft);
  margin: 0.5rem 0 2rem;
}

/* === Form === */
.creation-form {
  display: flex;
  flex-direction: column;
  gap: 1.1rem;
}

.form-field {
  display: flex;
  flex-direction: column;
  gap: 0.35rem;
  position: relative;
}

.input-label {
  font-size: 0.85rem;
  font-weight: 600;
  color: var(--text-soft);
  text-transform: uppercase;
  letter-spacing: 0.06em;
}

.input-field {
  font-family: var(--font-sans);
  font-size: 1rem;
  padding: 0.7rem 0.9rem;
  border: 1px solid var(--ivory-border);
  border-radius: 0.6rem;
  background: #ffffff;
  color: var(--text-ink);
  transition: border-color var(--transition-fast), box-shadow var(--transition-fast);
}

.input-field:focus {
  outline: none;
  border-color: var(--gold);
  box-shadow: 0 0 0 3px var(--gold-glow);
}

.input-field:disabled {
  opacity: 0.6;
}

.textarea {
  resize: vertical;
  min-height: 6rem;
}

.input-counter {
  align-self: flex-end;
  font-size: 0.75rem;
  color: var(--text-soft);
}

.file-input {
  font-size: 0.9rem;
  color: var(--text-soft);
}

/* === Buttons === */
.btn-gold,
.btn-share,
.btn-ghost {
  font-family: var(--font-sans);
  font-size: 1rem;
  font-weight: 600;
  cursor: pointer;
  border: none;
  transition: transform var(--transition-fast),
    background var(--transition-normal),
    opacity var(--transition-fast);
}

.btn-gold {
  width: 100%;
  padding: 0.9rem;
  border-radius: 0.75rem;
  background: linear-gradient(135deg, var(--gold) 0%, var(--gold-bright) 100%);
  color: #ffffff;
  box-shadow: 0 6px 20px var(--gold-glow);
}

.btn-share {
  padding: 0.75rem 1.5rem;
  border-radius: 999px;
  background: var(--share);
  color: #ffffff;
}

.btn-share:hover {
  background: var(--share-dark);
}

.btn-ghost {
  padding: 0.75rem 1.5rem;
  border-radius: 999px;
  background: transparent;
  color: var(--gold);
  border: 1px solid var(--gold);
}

.btn-gold:hover,
.btn-share:hover,
.btn-ghost:hover {
  transform: translateY(-1px);
}

.btn--busy {
  opacity: 0.6;
  cursor: wait;
  transform: none;
}

/* === Countdown === */
.celebration-headline {
  font-size: 1.75rem;
  text-transform: uppercase;
}

.greeting {
  font-family: var(--font-serif);
  font-size: 1.25rem;
  font-style: italic;
  text-align: center;
  margin: 1rem 0 1.5rem;
}

.countdown-row {
  display: grid;
  grid-template-columns: repeat(4, 1fr);
  gap: 0.75rem;
}

.countdown-tile {
  background: #ffffff;
  border: 1px solid var(--ivory-border);
  border-radius: 0.75rem;
  padding: 0.9rem 0.25rem;
  text-align: center;
}

.countdown-value {
  font-family: var(--font-serif);
  font-size: 2rem;
  font-weight: 700;
  color: var(--gold);
  font-variant-numeric: tabular-nums;
}

.countdown-label {
  font-size: 0.7rem;
  text-transform: uppercase;
  letter-spacing: 0.1em;
  color: var(--text-soft);
}

.countdown-target {
  text-align: center;
  margin-top: 1rem;
  color: var(--text-soft);
}

/* === Reveal === */
.reveal {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
  animation: reveal-in 0.8s ease-out;
}

.reveal-image {
  max-width: 100%;
  max-height: 20rem;
  border-radius: 0.75rem;
  box-shadow: 0 8px 24px rgba(0, 0, 0, 0.2);
}

.reveal-message {
  font-size: 1.1rem;
  text-align: center;
  white-space: pre-wrap;
}

.reveal-attribution {
  font-family: var(--font-serif);
  font-style: italic;
  color: var(--gold);
}

.song-embed {
  border: none;
  border-radius: 0.75rem;
}

@keyframes reveal-in {
  from { opacity: 0; transform: translateY(12px); }
  to { opacity: 1; transform: translateY(0); }
}

.celebration-actions {
  display: flex;
  justify-content: center;
  flex-wrap: wrap;
  gap: 0.75rem;
  margin-top: 2rem;
}

/* === Confetti === */
.confetti-layer {
  position: fixed;
  inset: 0;
  pointer-events: none;
  overflow: hidden;
  z-index: 5;
}

.confetti-piece {
  position: absolute;
  width: 10px;
  height: 14px;
  border-radius: 2px;
  opacity: 0;
  animation: confetti-fall var(--duration, 2s) ease-in forwards;
}

@keyframes confetti-fall {
  0% {
    opacity: 1;
    translate: 0 -10vh;
    rotate: 0deg;
  }
  100% {
    opacity: 0;
    translate: calc(var(--rand-x, 0) * 30vw) 110vh;
    rotate: calc(var(--rand-rot, 1) * 720deg);
  }
}

/* === Notices === */
.notice {
  position: fixed;
  top: 1.5rem;
  left: 50%;
  transform: translateX(-50%);
  z-index: 10;
  padding: 0.8rem 1.4rem;
  border-radius: 0.75rem;
  font-weight: 600;
  color: #ffffff;
  box-shadow: 0 10px 30px rgba(0, 0, 0, 0.35);
  animation: notice-in 0.25s ease-out;
}

.notice--success {
  background: var(--share);
}

.notice--error {
  background: var(--danger);
}

@keyframes notice-in {
  from { opacity: 0; transform: translate(-50%, -8px); }
  to { opacity: 1; transform: translate(-50%, 0); }
}

/* === Responsive === */
@media (max-width: 480px) {
  .card-panel {
    padding: 2rem 1.25rem;
  }

  .countdown-value {
    font-size: 1.5rem;
  }
}

@media (prefers-reduced-motion: reduce) {
  .confetti-piece,
  .reveal,
  .notice {
    animation: none;
  }
}
"#;
