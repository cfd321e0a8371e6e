//! Embedded stylesheet and script for the single-page UI.

/// Page stylesheet.
pub const PAGE_CSS: &str = r"
:root {
    --bg: #1e1e2e;
    --panel: #313244;
    --text: #cdd6f4;
    --accent: #89b4fa;
}

body {
    margin: 0;
    min-height: 100vh;
    display: flex;
    flex-direction: column;
    align-items: center;
    background: var(--bg);
    color: var(--text);
    font-family: system-ui, sans-serif;
}

h1 {
    margin-top: 2.5rem;
    letter-spacing: 0.05em;
}

form.name-form {
    display: flex;
    gap: 0.5rem;
}

input[type=text] {
    padding: 0.5rem 0.75rem;
    border: 1px solid var(--panel);
    border-radius: 6px;
    background: var(--panel);
    color: var(--text);
}

button {
    padding: 0.5rem 1rem;
    border: none;
    border-radius: 6px;
    background: var(--accent);
    color: var(--bg);
    cursor: pointer;
}

.result {
    margin-top: 2rem;
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 1rem;
}

.result canvas {
    max-width: 90vw;
    border-radius: 8px;
    background: #ffffff;
}

.error {
    margin-top: 2rem;
    padding: 1rem 1.5rem;
    border-radius: 6px;
    background: #45273a;
}
";

/// Page script: random-name button, slow rotation of the rendered image, and
/// a download form for the current name.
pub const PAGE_SCRIPT: &str = r#"
document.addEventListener("DOMContentLoaded", () => {
  const ROTATION_STEP = 0.5;
  const input = document.getElementById("name");
  const randomButton = document.getElementById("random-name-btn");
  const canvas = document.getElementById("visual-hash-canvas");

  if (randomButton) {
    randomButton.addEventListener("click", async () => {
      const response = await fetch("/random-name");
      if (response.ok) {
        input.value = (await response.text()).trim();
      }
    });
  }

  if (!canvas) {
    return;
  }
  input.value = canvas.dataset.name;

  const ctx = canvas.getContext("2d");
  const img = new Image();
  let angle = 0;
  const spin = () => {
    ctx.clearRect(0, 0, canvas.width, canvas.height);
    ctx.save();
    ctx.translate(canvas.width / 2, canvas.height / 2);
    ctx.rotate((angle * Math.PI) / 180);
    ctx.drawImage(img, -img.width / 2, -img.height / 2);
    ctx.restore();
    angle = (angle + ROTATION_STEP) % 360;
    requestAnimationFrame(spin);
  };
  img.onload = spin;
  img.src = canvas.dataset.image;

  const form = document.createElement("form");
  form.action = "/download-plot";
  form.method = "post";
  const hidden = document.createElement("input");
  hidden.type = "hidden";
  hidden.name = "name";
  hidden.value = canvas.dataset.name;
  const button = document.createElement("button");
  button.type = "submit";
  button.textContent = "Download";
  form.append(hidden, button);
  document.getElementById("download-btn-container").appendChild(form);
});
"#;
