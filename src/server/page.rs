/// Single-page UI. All dynamic text is inserted with `textContent`.
pub const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Yes/No Question Answering</title>
<style>
  body { font-family: sans-serif; font-size: 14px; color: #333; margin: 0; }
  main { display: grid; grid-template-columns: 1fr 1fr 1fr; min-height: 100vh; }
  section { padding: 1rem; border-right: 1px solid #e0e0e0; }
  textarea { width: 100%; box-sizing: border-box; }
  pre { white-space: pre-wrap; background: #f6f6f6; padding: 0.5rem; }
  .ok { color: #28a745; } .err { color: #dc3545; } .warn { color: #ffa500; }
  #answer { text-align: center; font-size: 48px; font-weight: 500; }
</style>
</head>
<body>
<main>
  <section>
    <h1>Ollama Configuration</h1>
    <p id="installed"></p>
    <button id="refresh">Refresh Models</button>
    <h2>Available Models:</h2>
    <ul id="models"></ul>
    <p id="model-exists"></p>
    <small id="refreshed"></small>
  </section>
  <section>
    <h1>Yes/No Question Answering</h1>
    <label for="context">Enter the context:</label>
    <textarea id="context" rows="10"></textarea>
    <label for="question">Enter your yes/no question:</label>
    <textarea id="question" rows="3"></textarea>
    <p><button id="check">Check</button> <span id="state"></span></p>
    <p id="message"></p>
    <h2 id="answer"></h2>
  </section>
  <section>
    <h1>Debug Information</h1>
    <div id="debug">No debug information available. Run a query to see debug data.</div>
  </section>
</main>
<script>
const $ = (id) => document.getElementById(id);
const colors = { YES: "#28a745", NO: "#dc3545", UNCLEAR: "#ffc107" };

function text(tag, value, cls) {
  const el = document.createElement(tag);
  el.textContent = value;
  if (cls) el.className = cls;
  return el;
}

function renderStatus(s) {
  $("installed").replaceChildren(s.installed
    ? text("span", "Ollama Installation: Installed", "ok")
    : text("span", "Ollama Installation: Not Found", "err"));
  const list = $("models");
  list.replaceChildren();
  if (s.models.length === 0) {
    list.append(text("li", s.probe_error
      ? "Unable to retrieve model list: " + s.probe_error
      : "No models found."));
  }
  for (const m of s.models) {
    list.append(m === s.active_model ? text("li", m + " (active)", "ok") : text("li", m));
  }
  $("model-exists").textContent = s.active_model + " exists: " + s.model_exists;
  $("refreshed").textContent = "Models Refreshed on " + new Date(s.refreshed_at).toLocaleString();
  $("check").disabled = !s.installed || s.analysing;
}

function renderDebug(record) {
  const d = $("debug");
  d.replaceChildren(
    text("h2", "Full Prompt:"), text("pre", record.prompt),
    text("h2", "API Response:"), text("pre", JSON.stringify(record.result.raw, null, 2)),
    text("h2", "Answer Explanation:"), text("pre", record.explanation));
}

function renderFailure(prompt, error) {
  $("debug").replaceChildren(
    text("h2", "Full Prompt:"), text("pre", prompt),
    text("h2", "API Response:"), text("pre", error, "err"));
}

async function loadStatus(path, method) {
  const res = await fetch(path, { method: method || "GET" });
  renderStatus(await res.json());
}

async function runCheck() {
  $("check").disabled = true;
  $("state").replaceChildren(text("span", "Analysing...please wait", "warn"));
  $("message").replaceChildren();
  $("answer").textContent = "";
  try {
    const res = await fetch("/api/check", {
      method: "POST",
      headers: { "content-type": "application/json" },
      body: JSON.stringify({ context: $("context").value, question: $("question").value }),
    });
    const body = await res.json();
    if (res.ok) {
      $("answer").textContent = body.answer;
      $("answer").style.color = colors[body.answer];
      $("state").replaceChildren(text("span", "Completed", "ok"));
      renderDebug(body);
    } else {
      const cls = body.kind === "input_incomplete" ? "warn" : "err";
      const msg = body.remediation ? body.error + ". " + body.remediation : body.error;
      $("message").replaceChildren(text("span", msg, cls));
      $("state").replaceChildren();
      if (body.prompt) renderFailure(body.prompt, body.error);
    }
  } catch (err) {
    $("state").replaceChildren();
    $("message").replaceChildren(text("span", "Request failed: " + err, "err"));
  } finally {
    await loadStatus("/api/status").catch(() => { $("check").disabled = false; });
  }
}

$("refresh").addEventListener("click", () => loadStatus("/api/status/refresh", "POST"));
$("check").addEventListener("click", runCheck);
loadStatus("/api/status");
</script>
</body>
</html>
"##;
