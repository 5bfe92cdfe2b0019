//! Server-rendered HTML pages for the browser form
//!
//! Pages are built with plain `format!` and every user-supplied or
//! model-supplied string goes through `html_escape` first.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::models::{Budget, Choice, Diet, Equipment, FieldError, Gender, Goal, HealthMetrics, PlanRequest};

const TITLE: &str = "AI-Powered Fitness &amp; Nutrition Planner";

const STYLE: &str = r#"
    @keyframes gradient {
        0% { background-position: 0% 50%; }
        50% { background-position: 100% 50%; }
        100% { background-position: 0% 50%; }
    }
    body {
        margin: 0;
        font-family: system-ui, sans-serif;
        min-height: 100vh;
        background: linear-gradient(-45deg, #ee7752, #e73c7e, #23a6d5, #23d5ab);
        background-size: 400% 400%;
        animation: gradient 15s ease infinite;
        display: flex;
    }
    aside {
        width: 320px;
        padding: 24px;
        background-color: rgba(0, 0, 0, 0.4);
        backdrop-filter: blur(15px);
        color: white;
    }
    aside label { display: block; margin-top: 12px; }
    aside input, aside select { width: 100%; box-sizing: border-box; }
    aside button {
        margin-top: 20px;
        width: 100%;
        height: 50px;
        background-color: #000000;
        color: #ffffff;
        border-radius: 10px;
        border: 1px solid #333333;
        font-weight: bold;
    }
    main { flex: 1; padding: 24px; }
    .main-title {
        font-size: 42px;
        font-weight: 800;
        text-align: center;
        color: white;
        text-shadow: 2px 4px 8px rgba(0,0,0,0.2);
    }
    .tagline { text-align: center; color: white; }
    .metrics { display: flex; gap: 20px; }
    .metric-container {
        flex: 1;
        background-color: rgba(255, 255, 255, 0.95);
        padding: 20px;
        border-radius: 15px;
        box-shadow: 0 10px 25px rgba(0,0,0,0.1);
        border-top: 5px solid #ff4b4b;
        text-align: center;
        margin-bottom: 20px;
        color: #1e293b;
    }
    .hint {
        text-align: center;
        color: white;
        padding: 20px;
        background: rgba(0,0,0,0.2);
        border-radius: 10px;
    }
    .error {
        background: #fde2e2;
        color: #7f1d1d;
        padding: 12px;
        border-radius: 8px;
        margin-bottom: 8px;
    }
    .macros { color: white; }
    .macros progress { width: 100%; }
    .strategy {
        background-color: rgba(255, 255, 255, 0.98);
        padding: 30px;
        border-radius: 20px;
        border-left: 10px solid #007bff;
        color: #1e293b;
    }
"#;

/// Form page, optionally listing validation errors above the placeholder
pub fn form_page(request: &PlanRequest, errors: &[FieldError]) -> String {
    let body = if errors.is_empty() {
        "<div class='hint'>Enter your details in the sidebar and then click \
         'Generate My Personalized Plan'</div>"
            .to_string()
    } else {
        errors
            .iter()
            .map(|e| format!("<div class='error'>{}</div>", encode_text(&e.message)))
            .collect()
    };

    layout(request, &body)
}

/// Page shown when the AI service call failed
pub fn service_error_page(request: &PlanRequest, message: &str) -> String {
    let body = format!(
        "<div class='error'>AI service error: {}</div>",
        encode_text(message)
    );
    layout(request, &body)
}

/// Dashboard and AI strategy for a generated plan
pub fn result_page(request: &PlanRequest, metrics: &HealthMetrics, plan: &str) -> String {
    let macros: String = metrics
        .macros
        .iter()
        .map(|m| {
            format!(
                "<p>{} {}%</p><progress value='{:.2}' max='1'></progress>",
                m.nutrient,
                m.percent(),
                m.share
            )
        })
        .collect();

    let body = format!(
        "<section>\
           <h2 style='color: white;'>Dashboard</h2>\
           <div class='metrics'>\
             <div class='metric-container'><h3>BMI</h3><h2>{bmi:.1}</h2><p>{status}</p></div>\
             <div class='metric-container'><h3>Daily Calories</h3><h2>{calories}</h2><p>Target</p></div>\
             <div class='metric-container'><h3>Goal</h3><h2>{goal}</h2></div>\
           </div>\
           <div class='macros'><h3>Macro Targets</h3>{macros}</div>\
         </section>\
         <section>\
           <h2 style='color: white;'>AI Strategy</h2>\
           <div class='strategy'>{plan}</div>\
         </section>",
        bmi = metrics.bmi,
        status = metrics.bmi_status,
        calories = metrics.daily_calories,
        goal = request.goal,
        macros = macros,
        plan = plan_to_html(plan),
    );

    layout(request, &body)
}

/// Escape plan text and keep its line breaks
pub fn plan_to_html(plan: &str) -> String {
    encode_text(plan).replace('\n', "<br>")
}

fn layout(request: &PlanRequest, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\
         <html lang='en'>\
         <head>\
           <meta charset='utf-8'>\
           <title>Personalized AI Wellness</title>\
           <style>{style}</style>\
         </head>\
         <body>\
           {sidebar}\
           <main>\
             <h1 class='main-title'>{title}</h1>\
             <p class='tagline'>Smart &bull; Efficient &bull; Accessible</p>\
             <hr>\
             {body}\
           </main>\
         </body>\
         </html>",
        style = STYLE,
        sidebar = sidebar(request),
        title = TITLE,
        body = body,
    )
}

fn sidebar(request: &PlanRequest) -> String {
    format!(
        "<aside>\
           <h2>Your Profile</h2>\
           <form method='post' action='/plan'>\
             <label>Goal {goal}</label>\
             <label>Dietary Habit {diet}</label>\
             <label>Age <input type='number' name='age' value='{age}'></label>\
             <label>Weight (kg) <input type='number' name='weightKg' step='0.1' value='{weight}'></label>\
             <label>Height (ft) <input type='number' name='heightFt' step='0.1' value='{height}'></label>\
             <label>Gender {gender}</label>\
             <label>Weekly Budget Level {budget}</label>\
             <label>Country/Region <input type='text' name='location' value=\"{location}\"></label>\
             <label>Available Equipment {equipment}</label>\
             <button type='submit'>Generate My Personalized Plan</button>\
           </form>\
         </aside>",
        goal = select::<Goal>("goal", request.goal),
        diet = select::<Diet>("diet", request.diet),
        age = request.age,
        weight = request.weight_kg,
        height = request.height_ft,
        gender = select::<Gender>("gender", request.gender),
        budget = select::<Budget>("budget", request.budget),
        location = encode_double_quoted_attribute(&request.location),
        equipment = select::<Equipment>("equipment", request.equipment),
    )
}

fn select<T: Choice>(name: &str, current: T) -> String {
    let options: String = T::ALL
        .iter()
        .map(|option| {
            let selected = if *option == current { " selected" } else { "" };
            format!(
                "<option value=\"{label}\"{selected}>{label}</option>",
                label = option.label(),
                selected = selected
            )
        })
        .collect();

    format!("<select name='{}'>{}</select>", name, options)
}
